//! Keyed cache for query results, shared across stores.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;

/// Addresses one cached result set: a logical resource name plus the
/// owning parameter, e.g. `("organization-partners", Some(org_id))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub resource: &'static str,
    pub param: Option<String>,
}

impl CacheKey {
    /// Key scoped to one owning entity.
    pub fn scoped(resource: &'static str, param: impl Into<String>) -> Self {
        Self {
            resource,
            param: Some(param.into()),
        }
    }

    /// Key for a resource with no owning entity.
    pub fn global(resource: &'static str) -> Self {
        Self {
            resource,
            param: None,
        }
    }
}

#[derive(Debug)]
struct Entry {
    value: Value,
    stale: bool,
}

/// Process-wide query cache.
///
/// Stores hold a shared handle (`Arc<QueryCache>`); every instance reading
/// or invalidating the same key observes the same entry. This is the only
/// shared mutable state in the data layer, so pass the handle explicitly.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<CacheKey, Entry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-through access: returns the fresh cached value when present,
    /// otherwise awaits `fetch`, stores its result and returns it. A failed
    /// fetch stores nothing. The lock is never held across the await.
    pub async fn get_or_fetch<E, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(value) = self.fresh(&key) {
            return Ok(value);
        }
        let value = fetch().await?;
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key,
            Entry {
                value: value.clone(),
                stale: false,
            },
        );
        Ok(value)
    }

    /// Mark one entry stale; the next read refetches. Other keys are never
    /// affected.
    pub fn invalidate(&self, key: &CacheKey) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if let Some(entry) = entries.get_mut(key) {
            entry.stale = true;
        }
    }

    /// Drop one entry entirely.
    pub fn remove(&self, key: &CacheKey) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.remove(key);
    }

    /// Drop everything, e.g. on sign-out.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.clear();
    }

    /// Whether a fresh entry exists for this key.
    pub fn contains_fresh(&self, key: &CacheKey) -> bool {
        self.fresh(key).is_some()
    }

    fn fresh(&self, key: &CacheKey) -> Option<Value> {
        let entries = self.entries.lock().expect("cache lock poisoned");
        entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.value.clone())
    }
}
