pub mod models;
pub mod store;

pub use models::TeamMember;
pub use store::{TeamStore, MEMBERS_RESOURCE};
