use std::sync::Arc;

use tracing::debug;

use supabase::{Result, Supabase};

use crate::cache::{CacheKey, QueryCache};
use crate::domains::cached_rows;
use crate::sanitize::sanitize_html;

use super::models::EmailMessage;

pub const EMAIL_HISTORY_RESOURCE: &str = "email-history";

const EMAILS_TABLE: &str = "email_messages";

/// Read-only access to the email history of a deal.
pub struct EmailStore {
    client: Supabase,
    cache: Arc<QueryCache>,
}

impl EmailStore {
    pub fn new(client: Supabase, cache: Arc<QueryCache>) -> Self {
        Self { client, cache }
    }

    /// Email history of one deal, oldest first. Bodies are sanitized
    /// before they are cached. Disabled while the owning id is blank.
    pub async fn history(&self, deal_id: &str) -> Result<Vec<EmailMessage>> {
        if deal_id.trim().is_empty() {
            debug!("email history fetch disabled: no deal id");
            return Ok(Vec::new());
        }
        let key = CacheKey::scoped(EMAIL_HISTORY_RESOURCE, deal_id);
        let client = self.client.clone();
        let deal_id = deal_id.to_string();
        cached_rows(&self.cache, key, move || async move {
            let mut rows: Vec<EmailMessage> = client
                .from(EMAILS_TABLE)
                .eq("deal_id", &deal_id)
                .order_asc("sent_at")
                .fetch_all()
                .await?;
            for message in &mut rows {
                message.body_html = sanitize_html(&message.body_html);
            }
            Ok(rows)
        })
        .await
    }
}
