use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal CRM user. Read-only from this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}
