//! Pure Supabase platform client.
//!
//! A minimal client for the parts of the platform this workspace consumes:
//! table-style reads and updates over the PostgREST surface, and edge
//! function invocation. Auth flows, storage buckets and realtime channels
//! belong to the platform and are not wrapped here.
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase::{Supabase, SupabaseOptions};
//!
//! let client = Supabase::new(SupabaseOptions {
//!     url: "https://abc.supabase.co".into(),
//!     anon_key: "public-anon-key".into(),
//! });
//!
//! let partners: Vec<Partner> = client
//!     .from("organization_partners")
//!     .eq("organization_id", org_id)
//!     .order_asc("name")
//!     .fetch_all()
//!     .await?;
//! ```

pub mod error;
pub mod query;

pub use error::{Result, SupabaseError};
pub use query::QueryBuilder;

use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct SupabaseOptions {
    pub url: String,
    pub anon_key: String,
}

/// Handle to one Supabase project. Cheap to clone.
#[derive(Clone)]
pub struct Supabase {
    client: reqwest::Client,
    url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl Supabase {
    pub fn new(options: SupabaseOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: options.url.trim_end_matches('/').to_string(),
            anon_key: options.anon_key,
            access_token: None,
        }
    }

    /// Attach a signed-in user's access token. Requests fall back to the
    /// public key when no token is attached.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Entry point for table-style queries and updates.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone(), table)
    }

    /// Invoke a named edge function with a JSON body.
    ///
    /// Three failure shapes collapse into `Err`: transport errors, non-2xx
    /// statuses, and an `error` field inside a 2xx JSON response.
    pub async fn invoke(&self, function: &str, body: Value) -> Result<Value> {
        tracing::debug!(function, "invoking edge function");
        let url = format!("{}/functions/v1/{}", self.url, function);
        let response = self
            .request(Method::POST, &url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = response.json().await?;
        if let Some(err) = value.get("error") {
            if !err.is_null() {
                let message = err
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                return Err(SupabaseError::Function(message));
            }
        }
        Ok(value)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(self.access_token.as_deref().unwrap_or(&self.anon_key))
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
