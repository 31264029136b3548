//! Notification dispatch, kept apart from the data contract.

/// User-facing notification sink.
///
/// Stores dispatch through this trait so the request/response/cache
/// contract stays testable without a UI; a shell injects its toast-backed
/// implementation, tests inject a recorder.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: structured log lines.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("Notification: {}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("Notification: {}", message);
    }
}
