use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;

use supabase::{Supabase, SupabaseOptions};

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_project_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Validation is eager: call this at startup, before constructing any
    /// client. Every missing required variable is named in the error.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let url = env::var("SUPABASE_URL").ok();
        let anon_key = env::var("SUPABASE_ANON_KEY").ok();
        let project_id = env::var("SUPABASE_PROJECT_ID").ok();

        match (url, anon_key) {
            (Some(supabase_url), Some(supabase_anon_key)) => Ok(Self {
                supabase_url,
                supabase_anon_key,
                supabase_project_id: project_id,
            }),
            (url, anon_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push("SUPABASE_URL");
                }
                if anon_key.is_none() {
                    missing.push("SUPABASE_ANON_KEY");
                }
                bail!(
                    "missing required environment variables: {}",
                    missing.join(", ")
                );
            }
        }
    }

    /// Build a service client from this configuration.
    pub fn client(&self) -> Supabase {
        Supabase::new(SupabaseOptions {
            url: self.supabase_url.clone(),
            anon_key: self.supabase_anon_key.clone(),
        })
    }
}
