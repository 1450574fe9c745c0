//! Managed-backend catalog client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Products and collections live in a hosted Postgres exposed through a
//! PostgREST endpoint (`{BACKEND_URL}/rest/v1/{table}`). This module is the
//! only place that speaks that dialect; handlers see the [`Catalog`] trait so
//! routes can be tested against an in-memory mock.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use catalog::{Collection, Product, ProductQuery};
use serde::de::DeserializeOwned;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Error returned by catalog reads.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request did not complete.
    #[error("backend request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON rows.
    #[error("backend response parse failed: {0}")]
    Parse(String),
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Read-only catalog access. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Active products of the configured store, newest first.
    async fn active_products(&self) -> Result<Vec<Product>, BackendError>;

    /// One product by slug; `None` when no row matches.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, BackendError>;

    /// Active collections of the configured store, newest first.
    async fn active_collections(&self) -> Result<Vec<Collection>, BackendError>;
}

// =============================================================================
// REST CLIENT
// =============================================================================

pub struct RestCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    store_id: String,
}

impl RestCatalog {
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the TLS client cannot be built.
    pub fn new(base_url: &str, api_key: &str, store_id: &str, timeout_secs: u64) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            store_id: store_id.to_owned(),
        })
    }

    async fn get_rows<T: DeserializeOwned>(&self, table: &str, params: &[(&str, String)]) -> Result<Vec<T>, BackendError> {
        let response = self
            .http
            .get(table_url(&self.base_url, table))
            .query(params)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Status { status, body: text });
        }
        parse_rows(&text)
    }
}

#[async_trait::async_trait]
impl Catalog for RestCatalog {
    async fn active_products(&self) -> Result<Vec<Product>, BackendError> {
        let query = ProductQuery::active(&self.store_id);
        let rows = self.get_rows("products", &query.rest_params()).await?;
        Ok(query.apply(rows))
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, BackendError> {
        let rows: Vec<Product> = self
            .get_rows("products", &slug_params(&self.store_id, slug))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn active_collections(&self) -> Result<Vec<Collection>, BackendError> {
        let rows: Vec<Collection> = self
            .get_rows("collections", &collection_params(&self.store_id))
            .await?;
        Ok(rows.into_iter().filter(|c| c.status.is_active()).collect())
    }
}

// =============================================================================
// QUERY BUILDING
// =============================================================================

fn table_url(base_url: &str, table: &str) -> String {
    format!("{base_url}/rest/v1/{table}")
}

fn slug_params(store_id: &str, slug: &str) -> Vec<(&'static str, String)> {
    vec![
        ("select", "*".to_owned()),
        ("store_id", format!("eq.{store_id}")),
        ("slug", format!("eq.{slug}")),
        ("limit", "1".to_owned()),
    ]
}

fn collection_params(store_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("select", "*".to_owned()),
        ("store_id", format!("eq.{store_id}")),
        ("status", "eq.active".to_owned()),
        ("order", "created_at.desc".to_owned()),
    ]
}

fn parse_rows<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, BackendError> {
    serde_json::from_str::<Option<Vec<T>>>(json)
        .map(Option::unwrap_or_default)
        .map_err(|e| BackendError::Parse(e.to_string()))
}
