pub mod models;
pub mod store;

pub use models::{Conversation, Message, MessageDirection};
pub use store::{WhatsappStore, CONVERSATIONS_RESOURCE, MESSAGES_RESOURCE};
