use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::Field;

/// A partner (sócio) attached to a customer organization.
///
/// Identity and legal fields are written elsewhere; this layer reads them
/// and updates the contact subset only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPartner {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A contact person inside a customer organization, optionally linked to
/// a partner record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPerson {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub partner_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a partner's contact fields. Only these columns are
/// writable from this layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartnerContactUpdate {
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub email: Field<String>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub phone: Field<String>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub whatsapp: Field<String>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub postal_code: Field<String>,
}
