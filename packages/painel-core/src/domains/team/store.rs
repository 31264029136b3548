use std::sync::Arc;

use supabase::{Result, Supabase};

use crate::cache::{CacheKey, QueryCache};
use crate::domains::cached_rows;

use super::models::TeamMember;

pub const MEMBERS_RESOURCE: &str = "team-members";

const MEMBERS_TABLE: &str = "team_members";

/// Read-only access to the team roster.
pub struct TeamStore {
    client: Supabase,
    cache: Arc<QueryCache>,
}

impl TeamStore {
    pub fn new(client: Supabase, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// All team members, ordered by display name. Global key: there is no
    /// owning entity.
    pub async fn members(&self) -> Result<Vec<TeamMember>> {
        let key = CacheKey::global(MEMBERS_RESOURCE);
        let client = self.client.clone();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(MEMBERS_TABLE)
                .order_asc("display_name")
                .fetch_all()
                .await
        })
        .await
    }
}
