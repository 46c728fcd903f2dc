use serde::{Deserialize, Serialize};

use crate::math::point::Point;

/// An ellipse given by its bounding box, in local body coordinates.
///
/// Only circles (equal width and height) can back a collider.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ellipse {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Ellipse {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A circle of `radius` centred on `center`.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether width and height agree to within a relative tolerance.
    pub fn is_circle(&self) -> bool {
        let scale = self.width.abs().max(self.height.abs()).max(1.0);
        (self.width - self.height).abs() <= 1e-9 * scale
    }
}
