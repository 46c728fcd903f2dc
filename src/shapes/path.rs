use serde::{Deserialize, Serialize};

use crate::math::point::Point;

/// One segment of an outline path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve: control point, end point.
    QuadTo(Point, Point),
    /// Cubic curve: two control points, end point.
    CubicTo(Point, Point, Point),
    Close,
}

impl PathSegment {
    /// Whether the segment is a straight-edge (or no-edge) segment.
    pub fn is_polygonal(&self) -> bool {
        matches!(
            self,
            PathSegment::MoveTo(_) | PathSegment::LineTo(_) | PathSegment::Close
        )
    }
}

/// An outline made of segments, in local body coordinates.
///
/// Paths are built with the chaining methods:
///
/// ```
/// use physics_core::shapes::Path;
///
/// let triangle = Path::new()
///     .move_to(0.0, 0.0)
///     .line_to(10.0, 0.0)
///     .line_to(0.0, 10.0)
///     .close();
/// assert_eq!(triangle.segments().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// A closed path through `vertices` in order.
    pub fn polygon(vertices: &[Point]) -> Self {
        let mut segments = Vec::with_capacity(vertices.len() + 1);
        for (i, v) in vertices.iter().enumerate() {
            if i == 0 {
                segments.push(PathSegment::MoveTo(*v));
            } else {
                segments.push(PathSegment::LineTo(*v));
            }
        }
        segments.push(PathSegment::Close);
        Self { segments }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.segments
            .push(PathSegment::QuadTo(Point::new(cx, cy), Point::new(x, y)));
        self
    }

    pub fn curve_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.segments.push(PathSegment::CubicTo(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(x, y),
        ));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Index of the first curved segment, if any.
    pub fn first_curved_segment(&self) -> Option<usize> {
        self.segments.iter().position(|s| !s.is_polygonal())
    }
}
