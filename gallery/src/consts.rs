//! Shipped tuning constants for the gallery crate.

// ── Explore overlay ─────────────────────────────────────────────

/// Canvas overflow beyond the viewport, per axis (`canvas / viewport - 1`).
pub const DEFAULT_OVERFLOW_RATIO: f64 = 0.5;

/// Smallest accepted overflow ratio (canvas 1.5x the viewport).
pub const MIN_OVERFLOW_RATIO: f64 = 0.5;

/// Largest accepted overflow ratio (canvas 4x the viewport).
pub const MAX_OVERFLOW_RATIO: f64 = 3.0;

/// Pixel drift at the rect edge in centered mode.
pub const CENTERED_RANGE_PX: f64 = 40.0;

/// Pointer delta multiplier in the relative modes.
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

// ── Spring ──────────────────────────────────────────────────────

pub const GALLERY_STIFFNESS: f64 = 150.0;
pub const GALLERY_DAMPING: f64 = 25.0;
pub const CURSOR_STIFFNESS: f64 = 200.0;
pub const CURSOR_DAMPING: f64 = 25.0;
pub const SPRING_MASS: f64 = 1.0;

/// Displacement below which a spring counts as settled, in pixels.
pub const REST_DELTA: f64 = 0.01;

/// Speed below which a spring counts as settled, in pixels per second.
pub const REST_SPEED: f64 = 0.01;

/// Longest integration substep, in seconds.
pub const MAX_SUBSTEP_SECS: f64 = 1.0 / 120.0;

/// Frame deltas are clamped to this so a backgrounded tab does not jump.
pub const MAX_FRAME_SECS: f64 = 0.064;

// ── Momentum ────────────────────────────────────────────────────

/// Per-frame velocity multiplier.
pub const DECAY_FACTOR: f64 = 0.92;

/// Momentum stops once both velocity components fall below this, px/frame.
pub const VELOCITY_THRESHOLD: f64 = 0.1;

/// Pointer silence that counts as "stopped", in milliseconds.
pub const QUIET_INTERVAL_MS: u32 = 100;

// ── Hero / scroll parallax ──────────────────────────────────────

/// Divisor applied to the hero pointer offset from center.
pub const HERO_POINTER_DIVISOR: f64 = 20.0;

/// Input domain of the hero parallax maps.
pub const HERO_INPUT_RANGE: (f64, f64) = (-50.0, 50.0);

/// Artist-process image travel across the scroll range, in percent.
pub const SCROLL_TRAVEL_PERCENT: f64 = 20.0;

// ── Ink trail ───────────────────────────────────────────────────

pub const TRAIL_EMIT_INTERVAL_MS: f64 = 50.0;
pub const TRAIL_MAX_DOTS: usize = 8;
pub const TRAIL_FADE_INTERVAL_MS: u32 = 300;
pub const TRAIL_BASE_SIZE_PX: f64 = 4.0;
pub const TRAIL_SIZE_STEP_PX: f64 = 0.3;
pub const TRAIL_BASE_ALPHA: f64 = 0.15;
pub const TRAIL_ALPHA_STEP: f64 = 0.015;
