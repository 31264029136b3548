use thiserror::Error;

pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Errors surfaced by the Supabase client.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Transport-level failure before a usable response was read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the REST or functions surface.
    #[error("service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Application-level `error` field in an otherwise successful
    /// function response.
    #[error("function error: {0}")]
    Function(String),

    /// A single row was requested but the filter matched none.
    #[error("no rows returned")]
    NoRows,

    /// Response body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
