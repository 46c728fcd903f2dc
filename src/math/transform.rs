use super::point::Point;

/// A 2D affine transform built as translate, then rotate, then scale.
///
/// Applying it to a local point scales the point, rotates it and finally
/// translates it, so `apply(p) = translation + R(rotation) * (scale * p)`.
/// The sine and cosine of the rotation are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Point,
    rotation: f64, // Angle in radians
    scale: f64,
    cos: f64,
    sin: f64,
}

impl Transform {
    /// Creates a new transform.
    pub fn new(translation: Point, rotation: f64, scale: f64) -> Self {
        Self {
            translation,
            rotation,
            scale,
            cos: rotation.cos(),
            sin: rotation.sin(),
        }
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Point::ORIGIN, 0.0, 1.0)
    }

    pub fn translation(&self) -> Point {
        self.translation
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a point from local space into world space.
    pub fn apply(&self, point: Point) -> Point {
        let sx = point.x * self.scale;
        let sy = point.y * self.scale;
        let rotated = Point::new(sx * self.cos - sy * self.sin, sx * self.sin + sy * self.cos);
        rotated + self.translation
    }

    /// Maps a local length (such as a radius) into world space.
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scale.abs()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
