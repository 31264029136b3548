pub mod models;
pub mod store;

pub use models::{OrganizationPartner, OrganizationPerson, PartnerContactUpdate};
pub use store::{OrganizationStore, PARTNERS_RESOURCE, PEOPLE_RESOURCE};
