use std::sync::Arc;

use tracing::{debug, error};

use supabase::{Result, Supabase, SupabaseError};

use crate::cache::{CacheKey, QueryCache};
use crate::domains::cached_rows;
use crate::notify::Notifier;
use crate::scope::ViewScope;

use super::models::{OrganizationPartner, OrganizationPerson, PartnerContactUpdate};

pub const PARTNERS_RESOURCE: &str = "organization-partners";
pub const PEOPLE_RESOURCE: &str = "organization-people";

const PARTNERS_TABLE: &str = "organization_partners";
const PEOPLE_TABLE: &str = "organization_people";

/// Data access for organization partners and people.
pub struct OrganizationStore {
    client: Supabase,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl OrganizationStore {
    pub fn new(client: Supabase, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            cache,
            notifier,
        }
    }

    /// Partners of one organization, ordered by name. Disabled (no remote
    /// call, no cache entry) while the owning id is blank.
    pub async fn partners(&self, organization_id: &str) -> Result<Vec<OrganizationPartner>> {
        if organization_id.trim().is_empty() {
            debug!("partner fetch disabled: no organization id");
            return Ok(Vec::new());
        }
        let key = CacheKey::scoped(PARTNERS_RESOURCE, organization_id);
        let client = self.client.clone();
        let organization_id = organization_id.to_string();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(PARTNERS_TABLE)
                .eq("organization_id", &organization_id)
                .order_asc("name")
                .fetch_all()
                .await
        })
        .await
    }

    /// People of one organization, ordered by name. Disabled while the
    /// owning id is blank.
    pub async fn people(&self, organization_id: &str) -> Result<Vec<OrganizationPerson>> {
        if organization_id.trim().is_empty() {
            debug!("people fetch disabled: no organization id");
            return Ok(Vec::new());
        }
        let key = CacheKey::scoped(PEOPLE_RESOURCE, organization_id);
        let client = self.client.clone();
        let organization_id = organization_id.to_string();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(PEOPLE_TABLE)
                .eq("organization_id", &organization_id)
                .order_asc("name")
                .fetch_all()
                .await
        })
        .await
    }

    /// Update one partner's contact fields.
    ///
    /// On success the partner list of the owning organization is
    /// invalidated (once) and a success notification dispatched, unless
    /// the initiating view is gone, in which case the late success changes
    /// nothing. On failure the cache is untouched, the failure is notified
    /// and logged. No optimistic update, no retry.
    pub async fn update_partner_contact(
        &self,
        scope: &ViewScope,
        partner_id: &str,
        organization_id: &str,
        update: PartnerContactUpdate,
    ) -> Result<OrganizationPartner> {
        let result: Result<Vec<OrganizationPartner>> = self
            .client
            .from(PARTNERS_TABLE)
            .eq("id", partner_id)
            .update(&update)
            .await;

        match result.and_then(|rows| rows.into_iter().next().ok_or(SupabaseError::NoRows)) {
            Ok(partner) => {
                if scope.is_cancelled() {
                    debug!(partner_id, "update landed after view cancellation, skipping side effects");
                    return Ok(partner);
                }
                self.cache
                    .invalidate(&CacheKey::scoped(PARTNERS_RESOURCE, organization_id));
                self.notifier.success("Contact details saved");
                Ok(partner)
            }
            Err(err) => {
                error!(partner_id, error = %err, "failed to update partner contact");
                self.notifier.error("Could not save contact details");
                Err(err)
            }
        }
    }
}
