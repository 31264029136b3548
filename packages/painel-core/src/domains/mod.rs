//! Per-entity stores: the data-access units the presentation layer consumes.

pub mod deals;
pub mod email;
pub mod organizations;
pub mod team;
pub mod whatsapp;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use supabase::Result;

use crate::cache::{CacheKey, QueryCache};

/// Read-through helper shared by every list read: fetch rows, park them in
/// the cache under `key`, hand back the typed result.
pub(crate) async fn cached_rows<T, F, Fut>(
    cache: &QueryCache,
    key: CacheKey,
    fetch: F,
) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let value = cache
        .get_or_fetch(key, || async move {
            let rows = fetch().await?;
            Ok(serde_json::to_value(rows)?)
        })
        .await?;
    Ok(serde_json::from_value(value)?)
}
