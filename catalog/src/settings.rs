//! Store settings delivered to the client at `/api/settings`.
//!
//! The server builds [`StoreSettings`] from its environment; the client falls
//! back to [`StoreSettings::default`] when the request fails.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::MoneyFormat;

/// How pointer input drives the explore-gallery canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionMode {
    /// Pointer position inside the surface maps to a canvas position.
    Absolute,
    /// Pointer position relative to the surface center maps to a small
    /// fixed-range drift; leaving the surface recenters.
    #[default]
    Centered,
    /// Pointer deltas accumulate into a running offset.
    Delta,
    /// Delta mapping that keeps gliding after the pointer stops.
    Momentum,
}

impl MotionMode {
    pub const ALL: [Self; 4] = [Self::Absolute, Self::Centered, Self::Delta, Self::Momentum];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Centered => "centered",
            Self::Delta => "delta",
            Self::Momentum => "momentum",
        }
    }

    /// Whether the mode accumulates pointer deltas.
    #[must_use]
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Delta | Self::Momentum)
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownMotionMode(s.to_owned()))
    }
}

/// Gallery knobs the server exposes to operators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryTuning {
    pub mode: MotionMode,
    /// `canvas / viewport - 1`, applied to both axes.
    pub overflow_ratio: f64,
    /// Multiplier on pointer deltas in the relative modes.
    pub sensitivity: f64,
}

impl Default for GalleryTuning {
    fn default() -> Self {
        Self { mode: MotionMode::default(), overflow_ratio: 0.5, sensitivity: 1.0 }
    }
}

/// Everything the client needs to render the storefront chrome and prices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Scopes client-side product filtering; empty until the server answers.
    pub store_id: String,
    pub store_name: String,
    pub money: MoneyFormat,
    pub gallery: GalleryTuning,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_id: String::new(),
            store_name: "Chaos Theory".to_owned(),
            money: MoneyFormat::default(),
            gallery: GalleryTuning::default(),
        }
    }
}
