//! Rendered-offset integrators.
//!
//! DESIGN
//! ======
//! [`Spring`] is a per-axis mass/spring/damper evaluated with semi-implicit
//! Euler. Frame deltas are clamped to [`MAX_FRAME_SECS`] and split into
//! substeps of at most [`MAX_SUBSTEP_SECS`] so the result does not depend on
//! the display refresh rate. Once displacement and speed both fall under the
//! rest thresholds the spring snaps onto the target and reports rest.
//!
//! [`Momentum`] is the glide after a relative gesture stops: each frame adds
//! the velocity to the offset, then multiplies the velocity by the decay
//! factor. It stops once both velocity components are under the threshold.
//! After `n` frames the offset has moved by `sum(v0 * decay^i, i < n)`.
//!
//! [`MotionSmoother`] picks one per mapping mode: the spring modes ease the
//! rendered offset toward the mapper target, momentum mode renders the
//! target directly and integrates the glide into it.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::config::{GalleryConfig, MappingMode, SpringConfig};
use crate::consts::{MAX_FRAME_SECS, MAX_SUBSTEP_SECS};
use crate::geom::Point;

#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: Point,
    velocity: Point,
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig, position: Point) -> Self {
        Self { config, position, velocity: Point::ZERO }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Place the spring at `position` with no velocity.
    pub fn jump_to(&mut self, position: Point) {
        self.position = position;
        self.velocity = Point::ZERO;
    }

    #[must_use]
    pub fn is_at_rest(&self, target: Point) -> bool {
        (self.position - target).both_below(self.config.rest_delta) && self.velocity.both_below(self.config.rest_speed)
    }

    /// Advance toward `target` by `dt_secs`. Returns `true` while still moving.
    pub fn step(&mut self, target: Point, dt_secs: f64) -> bool {
        if !(dt_secs.is_finite() && dt_secs > 0.0) {
            return !self.is_at_rest(target);
        }
        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        let mut remaining = dt_secs.min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let force = -((self.position - target) * stiffness) - self.velocity * damping;
            self.velocity += force * (h / mass);
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest(target) {
            self.jump_to(target);
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct Momentum {
    velocity: Point,
    decay: f64,
    threshold: f64,
    active: bool,
}

impl Momentum {
    #[must_use]
    pub fn new(decay: f64, threshold: f64) -> Self {
        Self { velocity: Point::ZERO, decay, threshold, active: false }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Start gliding at `velocity` px/frame. Velocities already under the
    /// threshold do not start a glide.
    pub fn launch(&mut self, velocity: Point) {
        self.velocity = velocity;
        self.active = velocity.is_finite() && !velocity.both_below(self.threshold);
        if !self.active {
            self.velocity = Point::ZERO;
        }
    }

    pub fn cancel(&mut self) {
        self.velocity = Point::ZERO;
        self.active = false;
    }

    /// Advance `offset` by one frame. Returns `false` without touching
    /// `offset` when no glide is active.
    pub fn step(&mut self, offset: &mut Point) -> bool {
        if !self.active {
            return false;
        }
        *offset += self.velocity;
        self.velocity = self.velocity * self.decay;
        if self.velocity.both_below(self.threshold) {
            self.cancel();
        }
        true
    }
}

/// Rendered offset for one overlay.
#[derive(Debug, Clone)]
pub struct MotionSmoother {
    mode: MappingMode,
    spring: Spring,
    momentum: Momentum,
}

impl MotionSmoother {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            mode: config.mapping_mode,
            spring: Spring::new(config.spring, Point::ZERO),
            momentum: Momentum::new(config.decay_factor, config.velocity_threshold),
        }
    }

    /// Offset to paint this frame.
    #[must_use]
    pub fn rendered(&self) -> Point {
        self.spring.position()
    }

    #[must_use]
    pub fn is_gliding(&self) -> bool {
        self.momentum.is_active()
    }

    /// Stop everything and render `at`.
    pub fn reset(&mut self, at: Point) {
        self.momentum.cancel();
        self.spring.jump_to(at);
    }

    /// Pointer moved the target. Momentum mode renders it immediately and
    /// drops any glide in progress.
    pub fn track(&mut self, target: Point) {
        if self.mode == MappingMode::Momentum {
            self.momentum.cancel();
            self.spring.jump_to(target);
        }
    }

    /// Start a glide (momentum mode only). Returns whether one started.
    pub fn launch(&mut self, velocity: Point) -> bool {
        if self.mode != MappingMode::Momentum {
            return false;
        }
        self.momentum.launch(velocity);
        self.momentum.is_active()
    }

    pub fn cancel_momentum(&mut self) {
        self.momentum.cancel();
    }

    /// Advance one frame. In momentum mode the glide is written back into
    /// `target`. Returns `true` while another frame is needed.
    pub fn step(&mut self, target: &mut Point, dt_secs: f64) -> bool {
        if self.mode == MappingMode::Momentum {
            let moving = self.momentum.step(target);
            self.spring.jump_to(*target);
            return moving && self.momentum.is_active();
        }
        self.spring.step(*target, dt_secs)
    }
}
