use std::sync::Arc;

use tracing::debug;

use supabase::{Result, Supabase};

use crate::cache::{CacheKey, QueryCache};
use crate::domains::cached_rows;

use super::models::Deal;

pub const DEALS_RESOURCE: &str = "deals";

const DEALS_TABLE: &str = "deals";

/// Read-only access to an organization's deals.
pub struct DealStore {
    client: Supabase,
    cache: Arc<QueryCache>,
}

impl DealStore {
    pub fn new(client: Supabase, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// Deals of one organization, ordered by title. Disabled while the
    /// owning id is blank.
    pub async fn deals(&self, organization_id: &str) -> Result<Vec<Deal>> {
        if organization_id.trim().is_empty() {
            debug!("deal fetch disabled: no organization id");
            return Ok(Vec::new());
        }
        let key = CacheKey::scoped(DEALS_RESOURCE, organization_id);
        let client = self.client.clone();
        let organization_id = organization_id.to_string();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(DEALS_TABLE)
                .eq("organization_id", &organization_id)
                .order_asc("title")
                .fetch_all()
                .await
        })
        .await
    }
}
