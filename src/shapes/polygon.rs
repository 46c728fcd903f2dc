use crate::common::error::PhysicsError;
use crate::math::point::Point;

use super::path::{Path, PathSegment};
use super::rectangle::Rectangle;

/// A polygon given by its vertices in local body coordinates.
///
/// The outline is implicitly closed: the last vertex connects back to the
/// first. Convexity is assumed, not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from a vertex list.
    ///
    /// Returns `DegenerateShape` if `vertices` is empty. One or two vertices
    /// are accepted and collide as a point or a segment.
    pub fn new(vertices: Vec<Point>) -> Result<Self, PhysicsError> {
        if vertices.is_empty() {
            return Err(PhysicsError::DegenerateShape);
        }
        Ok(Polygon { vertices })
    }

    /// The four corners of a rectangle.
    pub fn from_rectangle(rect: &Rectangle) -> Result<Self, PhysicsError> {
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(PhysicsError::NegativeDimensions {
                width: rect.width,
                height: rect.height,
            });
        }
        Self::new(rect.corners().to_vec())
    }

    /// Flattens a straight-edged path into its vertex list.
    ///
    /// Consecutive duplicate points are collapsed, and a final vertex equal
    /// to the first is dropped since the outline closes implicitly.
    pub fn from_path(path: &Path) -> Result<Self, PhysicsError> {
        let mut vertices: Vec<Point> = Vec::with_capacity(path.segments().len());
        for (index, segment) in path.segments().iter().enumerate() {
            match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    if vertices.last() != Some(p) {
                        vertices.push(*p);
                    }
                }
                PathSegment::Close => {}
                PathSegment::QuadTo(..) | PathSegment::CubicTo(..) => {
                    return Err(PhysicsError::NonPolygonalSegment { index });
                }
            }
        }
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self::new(vertices)
    }

    /// Edges as (start, end) pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
