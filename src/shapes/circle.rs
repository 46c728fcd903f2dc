use crate::common::error::PhysicsError;
use crate::math::point::Point;

use super::ellipse::Ellipse;

/// A circle in local body coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Normalizes an ellipse outline into a circle.
    pub fn from_ellipse(ellipse: &Ellipse) -> Result<Self, PhysicsError> {
        if ellipse.width < 0.0 || ellipse.height < 0.0 {
            return Err(PhysicsError::NegativeDimensions {
                width: ellipse.width,
                height: ellipse.height,
            });
        }
        if !ellipse.is_circle() {
            return Err(PhysicsError::NonCircularEllipse {
                width: ellipse.width,
                height: ellipse.height,
            });
        }
        Ok(Self::new(ellipse.center(), ellipse.width / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_from_ellipse() {
        let c = Circle::from_ellipse(&Ellipse::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(c.center, Point::new(5.0, 5.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn test_zero_size_ellipse_is_a_point_circle() {
        let c = Circle::from_ellipse(&Ellipse::default()).unwrap();
        assert_eq!(c, Circle::new(Point::ORIGIN, 0.0));
    }

    #[test]
    fn test_non_circular_ellipse_rejected() {
        let err = Circle::from_ellipse(&Ellipse::new(0.0, 0.0, 10.0, 5.0)).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::NonCircularEllipse {
                width: 10.0,
                height: 5.0
            }
        );
    }

    #[test]
    fn test_negative_ellipse_rejected() {
        let err = Circle::from_ellipse(&Ellipse::new(0.0, 0.0, -2.0, -2.0)).unwrap_err();
        assert!(matches!(err, PhysicsError::NegativeDimensions { .. }));
    }
}
