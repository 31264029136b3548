pub mod models;
pub mod store;

pub use models::{Deal, DealStage};
pub use store::{DealStore, DEALS_RESOURCE};
