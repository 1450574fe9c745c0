//! Product, variant and collection records as served by the managed backend.
//!
//! Records are read-only on this side of the wire. The backend owns creation,
//! pricing and inventory; the storefront only filters, orders and displays.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Publication status of a product or collection.
///
/// Unknown strings from the backend are preserved in [`ProductStatus::Other`]
/// and never match the active query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
    Other(String),
}

impl ProductStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "draft" => Self::Draft,
            "archived" => Self::Archived,
            _ => Self::Other(raw),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.as_str().to_owned()
    }
}

fn default_status() -> ProductStatus {
    ProductStatus::Active
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named product option (e.g. `Size`) and its allowed values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// A purchasable variant: one combination of option values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
    /// Option name -> selected value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: BTreeMap<String, String>,
}

/// A product row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub store_id: Option<String>,
    pub title: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default = "default_status")]
    pub status: ProductStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Backend-authored HTML.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<ProductOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// First non-blank image URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }

    /// Detail route for this product.
    #[must_use]
    pub fn route(&self) -> String {
        product_route(&self.slug)
    }
}

/// Detail route for a product slug: `/products/{slug}`.
#[must_use]
pub fn product_route(slug: &str) -> String {
    format!("/products/{slug}")
}

/// A curated group of products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_status")]
    pub status: ProductStatus,
}

/// Store-scoped product listing query.
///
/// Results are always ordered newest first (`created_at` descending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub store_id: String,
    pub status: ProductStatus,
}

impl ProductQuery {
    /// Active products of one store.
    #[must_use]
    pub fn active(store_id: impl Into<String>) -> Self {
        Self { store_id: store_id.into(), status: ProductStatus::Active }
    }

    /// Whether a product belongs to this query's result set.
    ///
    /// Rows without a `store_id` are assumed to be already store-scoped by
    /// the backend. A query with an empty store id leaves scoping to the
    /// backend entirely.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let store_ok = self.store_id.is_empty()
            || product
                .store_id
                .as_deref()
                .is_none_or(|id| id == self.store_id);
        store_ok && product.status == self.status
    }

    /// Filter and order an unordered product list.
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut selected = products
            .into_iter()
            .filter(|p| self.matches(p))
            .collect::<Vec<_>>();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }

    /// PostgREST query parameters for this listing.
    #[must_use]
    pub fn rest_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_owned()),
            ("store_id", format!("eq.{}", self.store_id)),
            ("status", format!("eq.{}", self.status.as_str())),
            ("order", "created_at.desc".to_owned()),
        ]
    }
}
