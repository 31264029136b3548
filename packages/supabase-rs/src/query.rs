use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Result, Supabase, SupabaseError};

/// Builder for table-style reads and updates against the REST surface.
///
/// Filters compose as PostgREST query parameters, e.g.
/// `?organization_id=eq.<uuid>&order=name.asc`. Values are URL-encoded by
/// the underlying HTTP client.
pub struct QueryBuilder {
    client: Supabase,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl QueryBuilder {
    pub(crate) fn new(client: Supabase, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Equality filter on a column.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Ascending order on a column.
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    /// Descending order on a column.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Fetch all matching rows.
    pub async fn fetch_all<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let url = self.client.rest_url(&self.table);
        let response = self
            .client
            .request(Method::GET, &url)
            .query(&self.query_pairs())
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch exactly one row; `NoRows` when the filter matches none.
    pub async fn fetch_one<T: DeserializeOwned>(self) -> Result<T> {
        let mut rows: Vec<T> = self.fetch_all().await?;
        if rows.is_empty() {
            return Err(SupabaseError::NoRows);
        }
        Ok(rows.swap_remove(0))
    }

    /// Update matching rows with a JSON payload, returning the updated
    /// representation. Payload serialization is caller-defined, so a field
    /// serialized as `null` clears the column while an omitted field is
    /// left untouched.
    pub async fn update<T: DeserializeOwned>(self, payload: &impl Serialize) -> Result<Vec<T>> {
        tracing::debug!(table = %self.table, "updating rows");
        let url = self.client.rest_url(&self.table);
        let response = self
            .client
            .request(Method::PATCH, &url)
            .query(&self.query_pairs())
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.filters.clone();
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        pairs
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(SupabaseError::Api {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
