pub mod circle;
pub mod ellipse;
pub mod path;
pub mod polygon;
pub mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use path::{Path, PathSegment};
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use serde::{Deserialize, Serialize};

use crate::common::error::PhysicsError;

/// The outline a collider is built from, in local body coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Path(Path),
}

impl Default for Shape {
    /// A zero-size ellipse at the local origin.
    fn default() -> Self {
        Shape::Ellipse(Ellipse::default())
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Path> for Shape {
    fn from(p: Path) -> Self {
        Shape::Path(p)
    }
}

/// The normalized collision geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Polygon(Polygon),
}

impl Geometry {
    /// Normalizes a shape: ellipses become circles, rectangles and paths
    /// become polygons.
    pub fn from_shape(shape: &Shape) -> Result<Self, PhysicsError> {
        match shape {
            Shape::Ellipse(e) => Circle::from_ellipse(e).map(Geometry::Circle),
            Shape::Rectangle(r) => Polygon::from_rectangle(r).map(Geometry::Polygon),
            Shape::Path(p) => Polygon::from_path(p).map(Geometry::Polygon),
        }
    }
}
