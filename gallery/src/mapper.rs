//! Pointer to canvas-offset mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The explore overlay pans an oversized canvas under the viewport. The
//! mapper turns pointer events on the overlay surface into a *target*
//! offset; [`crate::motion`] then eases the rendered offset toward it.
//!
//! POLICIES
//! ========
//! - `Absolute`: pointer fraction inside the rect selects a canvas position,
//!   `target = -(fraction * overflow * size)`. Fraction 0.5 centers the canvas.
//! - `Centered`: pointer offset from the rect center in `[-1, 1]` drifts the
//!   canvas by at most `centered_range` pixels. Leaving recenters.
//! - `Delta` / `Momentum`: every move adds `-(delta * sensitivity)` to a
//!   running offset that persists across leave.
//!
//! The first move after a reset (or after the pointer re-enters) only records
//! a baseline; a delta is never taken against an unknown previous position.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::config::{GalleryConfig, MappingMode};
use crate::geom::{Point, Rect};

/// What a pointer move did to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapOutcome {
    /// Degenerate rect or non-finite input; nothing changed.
    Ignored,
    /// First move of a relative gesture; baseline recorded, target unchanged.
    Baseline,
    /// Absolute or centered mapping replaced the target.
    Retargeted,
    /// Relative mapping moved the target by `-(delta * sensitivity)`.
    Moved { delta: Point },
}

impl MapOutcome {
    /// Whether the target changed.
    #[must_use]
    pub fn changed_target(self) -> bool {
        matches!(self, Self::Retargeted | Self::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CoordinateMapper {
    mode: MappingMode,
    overflow: Point,
    sensitivity: f64,
    centered_range: f64,
    target: Point,
    baseline: Option<Point>,
    last_delta: Point,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            mode: config.mapping_mode,
            overflow: config.overflow(),
            sensitivity: config.sensitivity,
            centered_range: config.centered_range,
            target: Point::ZERO,
            baseline: None,
            last_delta: Point::ZERO,
        }
    }

    #[must_use]
    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Raw pointer delta of the most recent relative move.
    #[must_use]
    pub fn last_delta(&self) -> Point {
        self.last_delta
    }

    /// Back to zero with no baseline.
    pub fn reset(&mut self) {
        self.target = Point::ZERO;
        self.baseline = None;
        self.last_delta = Point::ZERO;
    }

    /// Overwrite the target (momentum integration, absolute centering).
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Target that centers the canvas for `rect` in absolute mode.
    #[must_use]
    pub fn centering_target(&self, rect: &Rect) -> Option<Point> {
        if rect.is_degenerate() {
            return None;
        }
        Some(-(Point::new(0.5, 0.5).scale(self.overflow).scale(rect.size())))
    }

    pub fn pointer_enter(&mut self) {
        self.baseline = None;
        self.last_delta = Point::ZERO;
    }

    pub fn pointer_leave(&mut self) {
        self.baseline = None;
        if self.mode == MappingMode::Centered {
            self.target = Point::ZERO;
        }
    }

    /// Map one pointer move at `client` over the surface `rect`.
    pub fn pointer_move(&mut self, client: Point, rect: &Rect) -> MapOutcome {
        if rect.is_degenerate() || !client.is_finite() {
            return MapOutcome::Ignored;
        }
        match self.mode {
            MappingMode::Absolute => {
                let Some(fraction) = rect.normalize(client) else {
                    return MapOutcome::Ignored;
                };
                self.target = -(fraction.scale(self.overflow).scale(rect.size()));
                MapOutcome::Retargeted
            }
            MappingMode::Centered => {
                let Some(fraction) = rect.normalize(client) else {
                    return MapOutcome::Ignored;
                };
                let percent = (fraction - Point::new(0.5, 0.5)) * 2.0;
                self.target = -(percent * self.centered_range);
                MapOutcome::Retargeted
            }
            MappingMode::Delta | MappingMode::Momentum => {
                let Some(previous) = self.baseline.replace(client) else {
                    return MapOutcome::Baseline;
                };
                let delta = client - previous;
                self.last_delta = delta;
                self.target += -(delta * self.sensitivity);
                MapOutcome::Moved { delta }
            }
        }
    }
}
