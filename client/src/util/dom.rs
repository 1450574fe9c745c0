//! Element geometry and pointer coordinates.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use gallery::geom::Point;
#[cfg(feature = "hydrate")]
use gallery::geom::Rect;

/// Inline style placing an element by percentage offsets and pixel height.
#[must_use]
pub fn slot_style(top_percent: f64, left_percent: f64, height_px: f64) -> String {
    format!("top: {top_percent}%; left: {left_percent}%; height: {height_px}px;")
}

/// CSS `translate(x, y)` in pixels.
#[must_use]
pub fn translate_px(offset: Point) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

/// Bounding rectangle of an element in viewport coordinates.
#[cfg(feature = "hydrate")]
pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Viewport rectangle; the explore overlay covers the whole window.
#[cfg(feature = "hydrate")]
pub fn viewport_rect() -> Option<Rect> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

#[cfg(feature = "hydrate")]
pub fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
