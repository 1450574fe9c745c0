//! REST API helpers for communicating with the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; pages log the error and
//! degrade to an empty or not-found state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use catalog::{Collection, Product, ProductQuery, StoreSettings};
use gallery::source::{ProductSource, SourceError};

/// Failure of a storefront API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl From<ApiError> for SourceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Request(msg) => Self::Request(msg),
            ApiError::Status(status) => Self::Status(status),
            ApiError::Parse(msg) => Self::Parse(msg),
            ApiError::Unavailable => Self::Request(ApiError::Unavailable.to_string()),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
const PRODUCTS_ENDPOINT: &str = "/api/products";
#[cfg(feature = "hydrate")]
const COLLECTIONS_ENDPOINT: &str = "/api/collections";
#[cfg(feature = "hydrate")]
const SETTINGS_ENDPOINT: &str = "/api/settings";

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(slug: &str) -> String {
    format!("{PRODUCTS_ENDPOINT}/{}", encode_path_segment(slug))
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// `404` on a single-product lookup means "no such piece", not a failure.
#[cfg(any(test, feature = "hydrate"))]
fn is_not_found(status: u16) -> bool {
    status == 404
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the active products from `/api/products`, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a product list.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(PRODUCTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one product from `/api/products/{slug}`. `Ok(None)` on 404.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and non-404 error statuses.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_product(slug: &str) -> Result<Option<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<Product>(&product_endpoint(slug)).await {
            Ok(product) => Ok(Some(product)),
            Err(ApiError::Status(status)) if is_not_found(status) => Ok(None),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the active collections from `/api/collections`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_collections() -> Result<Vec<Collection>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(COLLECTIONS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch store settings from `/api/settings`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_settings() -> Result<StoreSettings, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SETTINGS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// [`ProductSource`] over the storefront API, used by the explore overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProductSource;

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn active_products(&self, _query: &ProductQuery) -> Result<Vec<Product>, SourceError> {
        fetch_products().await.map_err(SourceError::from)
    }
}
