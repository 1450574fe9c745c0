//! Product list seam for the explore overlay.
//!
//! The client implements [`ProductSource`] over HTTP; tests use in-memory
//! mocks. [`load_active`] re-applies the query locally so a source that
//! ignores part of the filter still yields only active, store-scoped,
//! newest-first products.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use async_trait::async_trait;
use catalog::{Product, ProductQuery};

/// Error returned by a [`ProductSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The response carried a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not a product list.
    #[error("malformed product list: {0}")]
    Parse(String),
}

/// Fetches the products the overlay shows.
#[async_trait(?Send)]
pub trait ProductSource {
    async fn active_products(&self, query: &ProductQuery) -> Result<Vec<Product>, SourceError>;
}

/// Fetch once and normalize to the query's filter and order.
///
/// # Errors
///
/// Propagates the source's [`SourceError`].
pub async fn load_active<S>(source: &S, query: &ProductQuery) -> Result<Vec<Product>, SourceError>
where
    S: ProductSource + ?Sized,
{
    let products = source.active_products(query).await?;
    Ok(query.apply(products))
}
