//! Product detail page state.
//!
//! DESIGN
//! ======
//! The page fetches one product by slug, seeds a [`VariantSelection`] from
//! it and derives everything else (price, image, stock, edition) from the
//! selection on each render.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use catalog::{MoneyFormat, Product, VariantSelection, format_money};

use crate::net::api::ApiError;
use crate::state::cart::CartLine;
use crate::state::catalog::image_or_placeholder;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductPageState {
    pub product: Option<Product>,
    pub loading: bool,
    pub not_found: bool,
    pub selection: VariantSelection,
    pub quantity: u32,
}

impl Default for ProductPageState {
    fn default() -> Self {
        Self { product: None, loading: true, not_found: false, selection: VariantSelection::default(), quantity: 1 }
    }
}

impl ProductPageState {
    /// Reset for a new slug.
    pub fn start_loading(&mut self) {
        *self = Self::default();
    }

    /// Apply the fetch result. Errors are logged and shown as not found.
    pub fn loaded(&mut self, result: Result<Option<Product>, ApiError>) {
        self.loading = false;
        match result {
            Ok(Some(product)) => {
                self.selection = VariantSelection::initial(&product);
                self.product = Some(product);
                self.not_found = false;
            }
            Ok(None) => {
                self.product = None;
                self.not_found = true;
            }
            Err(e) => {
                log::error!("product: error fetching product: {e}");
                self.product = None;
                self.not_found = true;
            }
        }
    }

    /// Choose an option value. Unavailable values are ignored.
    pub fn select_option(&mut self, option: &str, value: &str) {
        let Some(product) = &self.product else {
            return;
        };
        if self.selection.is_value_available(product, option, value) {
            self.selection.select(option, value);
        }
    }

    #[must_use]
    pub fn is_value_available(&self, option: &str, value: &str) -> bool {
        self.product
            .as_ref()
            .is_some_and(|p| self.selection.is_value_available(p, option, value))
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn increment(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.product
            .as_ref()
            .is_some_and(|p| self.selection.in_stock(p))
    }

    #[must_use]
    pub fn price_label(&self, money: &MoneyFormat) -> String {
        self.product
            .as_ref()
            .map(|p| format_money(self.selection.current_price(p), money))
            .unwrap_or_default()
    }

    /// Struck-through compare-at price, when it exceeds the current price.
    #[must_use]
    pub fn compare_at_label(&self, money: &MoneyFormat) -> Option<String> {
        let product = self.product.as_ref()?;
        self.selection
            .current_compare_at(product)
            .map(|amount| format_money(amount, money))
    }

    #[must_use]
    pub fn image_src(&self) -> String {
        image_or_placeholder(self.product.as_ref().and_then(|p| self.selection.current_image(p)))
    }

    #[must_use]
    pub fn has_matching_variant(&self) -> bool {
        self.product
            .as_ref()
            .is_some_and(|p| self.selection.matching_variant(p).is_some())
    }

    #[must_use]
    pub fn edition_label(&self) -> String {
        self.product
            .as_ref()
            .map(|p| self.selection.edition(p).to_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn stock_label(&self) -> String {
        let count = self
            .product
            .as_ref()
            .and_then(|p| self.selection.stock(p))
            .unwrap_or(0);
        format!("{count} in stock")
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.in_stock() { "Acquire Piece" } else { "Currently Unavailable" }
    }

    /// Cart line for the current selection; `None` when nothing can be bought.
    #[must_use]
    pub fn cart_line(&self) -> Option<CartLine> {
        let product = self.product.as_ref()?;
        if !self.selection.in_stock(product) {
            return None;
        }
        Some(CartLine {
            product_id: product.id.clone(),
            variant_id: self.selection.matching_variant(product).map(|v| v.id.clone()),
            quantity: self.quantity,
        })
    }
}
