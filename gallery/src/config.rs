//! Gallery configuration.
//!
//! One [`GalleryConfig`] selects the mapping policy and every tuning knob for
//! an overlay instance. Build it with [`GalleryConfig::default`] or
//! [`GalleryConfig::from_tuning`] and run [`GalleryConfig::validate`] before
//! handing it to [`crate::overlay::GalleryOverlay`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use catalog::GalleryTuning;

use crate::consts::{
    CENTERED_RANGE_PX, CURSOR_DAMPING, CURSOR_STIFFNESS, DECAY_FACTOR, DEFAULT_OVERFLOW_RATIO, DEFAULT_SENSITIVITY,
    GALLERY_DAMPING, GALLERY_STIFFNESS, MAX_OVERFLOW_RATIO, MIN_OVERFLOW_RATIO, QUIET_INTERVAL_MS, REST_DELTA,
    REST_SPEED, SPRING_MASS, VELOCITY_THRESHOLD,
};
use crate::geom::Point;
use crate::layout::LayoutTable;

pub use catalog::MotionMode as MappingMode;

/// Error returned by configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A layout table needs at least one slot.
    #[error("layout table is empty")]
    EmptyLayout,
    /// A layout slot has a non-positive or non-finite height.
    #[error("layout slot {index} has an invalid height")]
    InvalidSlot { index: usize },
    /// Overflow ratio outside `[0.5, 3.0]`.
    #[error("overflow ratio on {axis} axis must be within [0.5, 3.0], got {value}")]
    OverflowOutOfRange { axis: char, value: f64 },
    /// A field that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    /// Decay factor outside `(0, 1)`.
    #[error("decay factor must be within (0, 1), got {0}")]
    DecayOutOfRange(f64),
}

/// Second-order spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Explore-canvas follower.
    pub const GALLERY: Self = Self::with(GALLERY_STIFFNESS, GALLERY_DAMPING);

    /// Custom cursor follower.
    pub const CURSOR: Self = Self::with(CURSOR_STIFFNESS, CURSOR_DAMPING);

    #[must_use]
    pub const fn with(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping, mass: SPRING_MASS, rest_delta: REST_DELTA, rest_speed: REST_SPEED }
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; `>= 1` means no overshoot.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        positive("stiffness", self.stiffness)?;
        positive("damping", self.damping)?;
        positive("mass", self.mass)?;
        positive("rest_delta", self.rest_delta)?;
        positive("rest_speed", self.rest_speed)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::GALLERY
    }
}

/// Complete policy for one explore overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub mapping_mode: MappingMode,
    pub overflow_x: f64,
    pub overflow_y: f64,
    pub sensitivity: f64,
    pub decay_factor: f64,
    /// Pixels per frame.
    pub velocity_threshold: f64,
    pub quiet_interval_ms: u32,
    /// Centered-mode drift at the rect edge, in pixels.
    pub centered_range: f64,
    pub spring: SpringConfig,
    pub layout: LayoutTable,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            mapping_mode: MappingMode::default(),
            overflow_x: DEFAULT_OVERFLOW_RATIO,
            overflow_y: DEFAULT_OVERFLOW_RATIO,
            sensitivity: DEFAULT_SENSITIVITY,
            decay_factor: DECAY_FACTOR,
            velocity_threshold: VELOCITY_THRESHOLD,
            quiet_interval_ms: QUIET_INTERVAL_MS,
            centered_range: CENTERED_RANGE_PX,
            spring: SpringConfig::GALLERY,
            layout: LayoutTable::default(),
        }
    }
}

impl GalleryConfig {
    /// Defaults overridden by the operator tuning served in store settings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`GalleryConfig::validate`].
    pub fn from_tuning(tuning: &GalleryTuning) -> Result<Self, ConfigError> {
        Self {
            mapping_mode: tuning.mode,
            overflow_x: tuning.overflow_ratio,
            overflow_y: tuning.overflow_ratio,
            sensitivity: tuning.sensitivity,
            ..Self::default()
        }
        .validate()
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first out-of-range field.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (axis, value) in [('x', self.overflow_x), ('y', self.overflow_y)] {
            if !(MIN_OVERFLOW_RATIO..=MAX_OVERFLOW_RATIO).contains(&value) {
                return Err(ConfigError::OverflowOutOfRange { axis, value });
            }
        }
        positive("sensitivity", self.sensitivity)?;
        positive("velocity_threshold", self.velocity_threshold)?;
        positive("centered_range", self.centered_range)?;
        positive("quiet_interval_ms", f64::from(self.quiet_interval_ms))?;
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(ConfigError::DecayOutOfRange(self.decay_factor));
        }
        self.spring.validate()?;
        Ok(self)
    }

    /// Overflow ratios as a vector.
    #[must_use]
    pub fn overflow(&self) -> Point {
        Point::new(self.overflow_x, self.overflow_y)
    }

    /// Canvas size as a percentage of the viewport, per axis.
    #[must_use]
    pub fn canvas_percent(&self) -> Point {
        Point::new((1.0 + self.overflow_x) * 100.0, (1.0 + self.overflow_y) * 100.0)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
