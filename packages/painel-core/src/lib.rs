//! Data layer for the Painel CRM front-ends.
//!
//! Per-entity stores wrap the remote data service with a keyed client-side
//! cache and injected notification dispatch. Sanitization and input-mask
//! helpers round out the surface the presentation layer consumes; nothing
//! here renders anything.

pub mod cache;
pub mod config;
pub mod domains;
pub mod field;
pub mod masks;
pub mod notify;
pub mod sanitize;
pub mod scope;

pub use cache::{CacheKey, QueryCache};
pub use config::Config;
pub use field::Field;
pub use notify::{Notifier, TracingNotifier};
pub use scope::ViewScope;
