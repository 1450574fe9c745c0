//! Catalog listing state for the landing page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use catalog::{Collection, Product, ProductQuery};

use crate::net::api::ApiError;

/// Fallback image for products and pieces without artwork.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolve an optional image URL to something an `<img>` can load.
#[must_use]
pub fn image_or_placeholder(url: Option<&str>) -> String {
    url.filter(|u| !u.trim().is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_owned()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub collections: Vec<Collection>,
    pub loading: bool,
}

impl CatalogState {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Store a product fetch result, filtered and ordered by `query`.
    /// Failures are logged and leave the list empty.
    pub fn apply_products(&mut self, result: Result<Vec<Product>, ApiError>, query: &ProductQuery) {
        self.loading = false;
        match result {
            Ok(products) => self.products = query.apply(products),
            Err(e) => {
                log::error!("catalog: error fetching products: {e}");
                self.products.clear();
            }
        }
    }

    pub fn apply_collections(&mut self, result: Result<Vec<Collection>, ApiError>) {
        match result {
            Ok(collections) => self.collections = collections,
            Err(e) => {
                log::error!("catalog: error fetching collections: {e}");
                self.collections.clear();
            }
        }
    }

    /// The masonry grid renders only once loading finished with results.
    #[must_use]
    pub fn shows_gallery(&self) -> bool {
        !self.loading && !self.products.is_empty()
    }

    #[must_use]
    pub fn piece_count_label(&self) -> String {
        piece_count_label(self.products.len())
    }
}

#[must_use]
pub fn piece_count_label(count: usize) -> String {
    format!("{count} Limited Edition Pieces")
}
