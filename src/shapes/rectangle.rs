use serde::{Deserialize, Serialize};

use crate::math::point::Point;

/// An axis-aligned rectangle with its corner at `(x, y)`, in local body coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle with its corner at the local origin.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The four corners in outline order, starting at `(x, y)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            r.corners(),
            [
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]
        );
        assert_eq!(Rectangle::with_size(5.0, 5.0).corners()[2], Point::new(5.0, 5.0));
    }
}
