pub mod models;
pub mod store;

pub use models::EmailMessage;
pub use store::{EmailStore, EMAIL_HISTORY_RESOURCE};
