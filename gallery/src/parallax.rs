//! Pointer and scroll parallax for the home-page sections.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{HERO_INPUT_RANGE, HERO_POINTER_DIVISOR, SCROLL_TRAVEL_PERCENT};
use crate::geom::{Point, Rect};

/// Linear map of `value` from `input` to `output`, clamped to the output
/// range. Reversed output ranges are allowed; a zero-width input range maps
/// everything to `output.0`.
#[must_use]
pub fn map_clamped(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span.abs() < f64::EPSILON || !value.is_finite() {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + t * (output.1 - output.0)
}

/// Hero pointer input: offset from the section center, scaled down by 20.
#[must_use]
pub fn hero_pointer(client: Point, rect: &Rect) -> Option<Point> {
    if rect.is_degenerate() || !client.is_finite() {
        return None;
    }
    let offset = rect.offset_from_center(client);
    Some(Point::new(offset.x / HERO_POINTER_DIVISOR, offset.y / HERO_POINTER_DIVISOR))
}

/// Translations for the two hero words, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeroParallax {
    /// "CHAOS" follows the pointer.
    pub chaos: Point,
    /// "CONTROL" and the slash move against it.
    pub control: Point,
}

#[must_use]
pub fn hero_parallax(pointer: Point) -> HeroParallax {
    HeroParallax {
        chaos: Point::new(
            map_clamped(pointer.x, HERO_INPUT_RANGE, (-15.0, 15.0)),
            map_clamped(pointer.y, HERO_INPUT_RANGE, (-10.0, 10.0)),
        ),
        control: Point::new(
            map_clamped(pointer.x, HERO_INPUT_RANGE, (10.0, -10.0)),
            map_clamped(pointer.y, HERO_INPUT_RANGE, (8.0, -8.0)),
        ),
    }
}

/// Scroll progress of a section through the viewport: 0 when its top meets
/// the viewport bottom, 1 when its bottom meets the viewport top.
#[must_use]
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + section_height;
    if !(travel.is_finite() && travel > 0.0) || !section_top.is_finite() {
        return 0.0;
    }
    ((viewport_height - section_top) / travel).clamp(0.0, 1.0)
}

/// Vertical image offset in percent for a scroll progress.
#[must_use]
pub fn scroll_parallax_percent(progress: f64) -> f64 {
    map_clamped(progress, (0.0, 1.0), (-SCROLL_TRAVEL_PERCENT, SCROLL_TRAVEL_PERCENT))
}
