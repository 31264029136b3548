use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sales pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Prospecting,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Prospecting => "Prospecting",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::Won => "Won",
            DealStage::Lost => "Lost",
        }
    }
}

/// A sales deal owned by an organization. Read-only from this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub stage: DealStage,
    pub value_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
