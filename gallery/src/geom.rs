#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D vector in CSS pixels (or a normalized fraction, by context).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    #[must_use]
    pub fn scale(self, by: Self) -> Self {
        Self::new(self.x * by.x, self.y * by.y)
    }

    /// Whether both components are strictly under `limit` in magnitude.
    #[must_use]
    pub fn both_below(self, limit: f64) -> bool {
        self.x.abs() < limit && self.y.abs() < limit
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Bounding rectangle of an element in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Zero-area, negative or non-finite rectangles cannot map a pointer.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Client coordinates to rect-local coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }

    /// Rect-local position as a fraction of the size (`[0,1]` inside the rect).
    ///
    /// Returns `None` for degenerate rects.
    #[must_use]
    pub fn normalize(&self, client: Point) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        let local = self.to_local(client);
        Some(Point::new(local.x / self.width, local.y / self.height))
    }

    /// Offset from the rect center in local pixels.
    #[must_use]
    pub fn offset_from_center(&self, client: Point) -> Point {
        self.to_local(client) - self.size() * 0.5
    }
}
