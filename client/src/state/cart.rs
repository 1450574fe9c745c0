//! Cart badge state.
//!
//! Checkout lives in an external service; the storefront only tracks what
//! was acquired during this visit so the header badge can show a count.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add a line, merging with an existing line for the same variant.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id && l.variant_id == line.variant_id)
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, l| total.saturating_add(l.quantity))
    }

    /// Badge text; `None` hides the badge.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        match self.item_count() {
            0 => None,
            n => Some(n.to_string()),
        }
    }
}
