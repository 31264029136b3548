//! Per-view cancellation for in-flight writes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle tied to one consuming view.
///
/// Reads are plain futures: dropping them abandons the fetch before any
/// cache write happens, so they need no handle. Writes keep running once
/// started; stores check the scope after the remote call and turn a late
/// success into a no-op: no invalidation, no notification.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    cancelled: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call on unmount or navigation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
