use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message in a deal's email history.
///
/// `body_html` is sanitized before it leaves the store; consumers can
/// render it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: Uuid,
    pub deal_id: Uuid,
    pub subject: String,
    pub from_address: String,
    pub body_html: String,
    pub sent_at: DateTime<Utc>,
}
