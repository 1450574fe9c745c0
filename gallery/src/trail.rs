//! Ink-trail dots left behind the custom cursor.
//!
//! A dot is emitted on pointer move at most once per
//! [`TRAIL_EMIT_INTERVAL_MS`]; the trail keeps the newest
//! [`TRAIL_MAX_DOTS`]. The host removes the oldest dot every
//! [`crate::consts::TRAIL_FADE_INTERVAL_MS`] while the trail is non-empty.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use std::collections::VecDeque;

use crate::consts::{
    TRAIL_ALPHA_STEP, TRAIL_BASE_ALPHA, TRAIL_BASE_SIZE_PX, TRAIL_EMIT_INTERVAL_MS, TRAIL_MAX_DOTS, TRAIL_SIZE_STEP_PX,
};
use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    /// Unique for the lifetime of the trail; used as the view key.
    pub id: u64,
    pub position: Point,
}

#[derive(Debug, Clone, Default)]
pub struct InkTrail {
    dots: VecDeque<TrailDot>,
    last_emit_ms: Option<f64>,
    next_id: u64,
}

impl InkTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position at `now_ms`. Returns whether a dot was added.
    pub fn record(&mut self, position: Point, now_ms: f64) -> bool {
        if let Some(last) = self.last_emit_ms {
            if now_ms - last <= TRAIL_EMIT_INTERVAL_MS {
                return false;
            }
        }
        self.next_id += 1;
        self.dots.push_back(TrailDot { id: self.next_id, position });
        while self.dots.len() > TRAIL_MAX_DOTS {
            self.dots.pop_front();
        }
        self.last_emit_ms = Some(now_ms);
        true
    }

    /// Drop the oldest dot. Returns whether one was removed.
    pub fn fade_oldest(&mut self) -> bool {
        self.dots.pop_front().is_some()
    }

    /// Oldest first.
    pub fn dots(&self) -> impl Iterator<Item = &TrailDot> {
        self.dots.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

/// Size and opacity of the dot at `index` (0 = oldest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub size_px: f64,
    pub alpha: f64,
}

#[must_use]
pub fn dot_style(index: usize) -> DotStyle {
    let i = f64::from(u32::try_from(index).unwrap_or(u32::MAX));
    DotStyle {
        size_px: (TRAIL_BASE_SIZE_PX - i * TRAIL_SIZE_STEP_PX).max(0.0),
        alpha: (TRAIL_BASE_ALPHA - i * TRAIL_ALPHA_STEP).max(0.0),
    }
}
