//! Variant selection for the product detail page.
//!
//! A product exposes named options (`Size`, `Frame`) and a list of variants,
//! each carrying one value per option. The page keeps a [`VariantSelection`]
//! of chosen values and derives the matching variant, its price, image and
//! stock from it.
//!
//! Inventory semantics: a variant with no `inventory_quantity` is untracked
//! and always purchasable; a tracked variant is in stock while its quantity
//! is positive. A product without variants is sold as a single piece and is
//! always in stock.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use std::collections::BTreeMap;

use crate::product::{Product, ProductVariant};

/// Edition label shown when a variant has no SKU.
pub const DEFAULT_EDITION: &str = "1/1";

/// Whether a single variant can be purchased.
#[must_use]
pub fn variant_in_stock(variant: &ProductVariant) -> bool {
    variant.inventory_quantity.is_none_or(|qty| qty > 0)
}

/// Option values chosen on the product page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantSelection {
    selected: BTreeMap<String, String>,
}

impl VariantSelection {
    /// Initial selection: the options of the first purchasable variant, or
    /// the first value of every option when none is purchasable.
    #[must_use]
    pub fn initial(product: &Product) -> Self {
        if let Some(variant) = product.variants.iter().find(|v| variant_in_stock(v)) {
            return Self { selected: variant.options.clone() };
        }
        let selected = product
            .options
            .iter()
            .filter_map(|opt| opt.values.first().map(|v| (opt.name.clone(), v.clone())))
            .collect();
        Self { selected }
    }

    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.selected.get(option).map(String::as_str)
    }

    #[must_use]
    pub fn is_selected(&self, option: &str, value: &str) -> bool {
        self.get(option) == Some(value)
    }

    pub fn select(&mut self, option: impl Into<String>, value: impl Into<String>) {
        self.selected.insert(option.into(), value.into());
    }

    /// The variant whose options equal the selection on every product option.
    ///
    /// A product with no options and exactly one variant matches that variant.
    #[must_use]
    pub fn matching_variant<'p>(&self, product: &'p Product) -> Option<&'p ProductVariant> {
        if product.options.is_empty() {
            return match product.variants.as_slice() {
                [only] => Some(only),
                _ => None,
            };
        }
        product.variants.iter().find(|variant| {
            product.options.iter().all(|opt| {
                let chosen = self.selected.get(&opt.name);
                chosen.is_some() && variant.options.get(&opt.name) == chosen
            })
        })
    }

    /// Whether choosing `value` for `option`, keeping every other selected
    /// value, leads to a purchasable variant.
    #[must_use]
    pub fn is_value_available(&self, product: &Product, option: &str, value: &str) -> bool {
        if product.variants.is_empty() {
            return true;
        }
        product.variants.iter().any(|variant| {
            variant.options.get(option).map(String::as_str) == Some(value)
                && self
                    .selected
                    .iter()
                    .filter(|(name, _)| name.as_str() != option)
                    .all(|(name, chosen)| variant.options.get(name).is_none_or(|v| v == chosen))
                && variant_in_stock(variant)
        })
    }

    #[must_use]
    pub fn in_stock(&self, product: &Product) -> bool {
        if product.variants.is_empty() {
            return true;
        }
        self.matching_variant(product).is_some_and(variant_in_stock)
    }

    #[must_use]
    pub fn current_price(&self, product: &Product) -> f64 {
        self.matching_variant(product)
            .and_then(|v| v.price)
            .unwrap_or(product.price)
    }

    /// Compare-at price, only when it exceeds the current price.
    #[must_use]
    pub fn current_compare_at(&self, product: &Product) -> Option<f64> {
        let compare = self
            .matching_variant(product)
            .and_then(|v| v.compare_at_price)
            .or(product.compare_at_price)?;
        (compare > self.current_price(product)).then_some(compare)
    }

    /// Variant image, then the first product image.
    #[must_use]
    pub fn current_image<'p>(&self, product: &'p Product) -> Option<&'p str> {
        self.matching_variant(product)
            .and_then(|v| v.image.as_deref())
            .filter(|url| !url.trim().is_empty())
            .or_else(|| product.primary_image())
    }

    /// Edition label: the variant SKU, or [`DEFAULT_EDITION`].
    #[must_use]
    pub fn edition<'p>(&self, product: &'p Product) -> &'p str {
        self.matching_variant(product)
            .and_then(|v| v.sku.as_deref())
            .filter(|sku| !sku.trim().is_empty())
            .unwrap_or(DEFAULT_EDITION)
    }

    /// Tracked stock count of the matching variant.
    #[must_use]
    pub fn stock(&self, product: &Product) -> Option<i64> {
        self.matching_variant(product).and_then(|v| v.inventory_quantity)
    }
}
