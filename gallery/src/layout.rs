//! Hand-authored placement tables.
//!
//! Items are placed by `table[index % table.len()]`; there is no packing and
//! no collision avoidance. When a list outgrows its table the placements
//! repeat and items overlap.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::ConfigError;

/// One placement on the virtual canvas.
///
/// `top_percent` / `left_percent` are relative to the canvas, not the
/// viewport. Tables built from heights alone leave both at zero and let the
/// surrounding grid flow position the item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    pub top_percent: f64,
    pub left_percent: f64,
    pub height_px: f64,
}

impl LayoutSlot {
    #[must_use]
    pub const fn new(top_percent: f64, left_percent: f64, height_px: f64) -> Self {
        Self { top_percent, left_percent, height_px }
    }

    #[must_use]
    pub const fn height(height_px: f64) -> Self {
        Self::new(0.0, 0.0, height_px)
    }
}

/// Heights of the explore overlay grid cells.
pub const OVERLAY_HEIGHTS: [f64; 8] = [500.0, 600.0, 550.0, 480.0, 520.0, 580.0, 510.0, 490.0];

/// Heights of the home-page masonry cells.
pub const MASONRY_HEIGHTS: [f64; 4] = [500.0, 600.0, 550.0, 480.0];

/// Scattered placements for the explore canvas, three loose rows of four.
pub const EXPLORATION_SLOTS: [LayoutSlot; 12] = [
    LayoutSlot::new(4.0, 3.0, 500.0),
    LayoutSlot::new(12.0, 27.0, 600.0),
    LayoutSlot::new(2.0, 52.0, 550.0),
    LayoutSlot::new(9.0, 76.0, 480.0),
    LayoutSlot::new(38.0, 8.0, 520.0),
    LayoutSlot::new(46.0, 33.0, 580.0),
    LayoutSlot::new(35.0, 57.0, 510.0),
    LayoutSlot::new(43.0, 80.0, 490.0),
    LayoutSlot::new(70.0, 2.0, 540.0),
    LayoutSlot::new(76.0, 26.0, 470.0),
    LayoutSlot::new(68.0, 50.0, 560.0),
    LayoutSlot::new(74.0, 74.0, 500.0),
];

/// A non-empty, immutable slot table.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    slots: Vec<LayoutSlot>,
}

impl LayoutTable {
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLayout`] for an empty slot list and
    /// [`ConfigError::InvalidSlot`] for a slot with a non-positive or
    /// non-finite height.
    pub fn new(slots: Vec<LayoutSlot>) -> Result<Self, ConfigError> {
        if slots.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        if let Some(index) = slots
            .iter()
            .position(|s| !(s.height_px.is_finite() && s.height_px > 0.0))
        {
            return Err(ConfigError::InvalidSlot { index });
        }
        Ok(Self { slots })
    }

    /// Height-only table.
    ///
    /// # Errors
    ///
    /// Same as [`LayoutTable::new`].
    pub fn from_heights(heights: &[f64]) -> Result<Self, ConfigError> {
        Self::new(heights.iter().copied().map(LayoutSlot::height).collect())
    }

    #[must_use]
    pub fn exploration() -> Self {
        Self { slots: EXPLORATION_SLOTS.to_vec() }
    }

    #[must_use]
    pub fn overlay() -> Self {
        Self { slots: OVERLAY_HEIGHTS.map(LayoutSlot::height).to_vec() }
    }

    #[must_use]
    pub fn masonry() -> Self {
        Self { slots: MASONRY_HEIGHTS.map(LayoutSlot::height).to_vec() }
    }

    /// Slot for the item at `index`. Total for every index.
    #[must_use]
    pub fn slot(&self, index: usize) -> LayoutSlot {
        self.slots[index % self.slots.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; present for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    /// Pair each item with its slot.
    pub fn place<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = (usize, &'a T, LayoutSlot)> + 'a {
        items
            .iter()
            .enumerate()
            .map(move |(i, item)| (i, item, self.slot(i)))
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::exploration()
    }
}
