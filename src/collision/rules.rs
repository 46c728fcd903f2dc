//! Per-shape strategies used by the separating axis test.
//!
//! Each geometry kind supplies three rules: which axes to test, how to
//! project itself onto an axis, and which of its points lies closest to a
//! given point. [`Geometry::rules`] picks the triad for a geometry by its tag.

use crate::math::interval::Interval;
use crate::math::point::Point;
use crate::math::transform::Transform;
use crate::math::vector2d::Vector2D;
use crate::shapes::{Circle, Geometry, Polygon};

/// Produces the candidate separating axes for a shape tested against another.
pub trait AxisRule {
    fn axes(
        &self,
        transform: &Transform,
        other: &dyn ShapeRules,
        other_transform: &Transform,
    ) -> Vec<Vector2D>;
}

/// Projects a transformed shape onto an axis.
pub trait ProjectionRule {
    fn project(&self, transform: &Transform, axis: &Vector2D) -> Interval;
}

/// Picks the point of a transformed shape nearest to `point`.
pub trait VertexSelectionRule {
    fn closest(&self, point: Point, transform: &Transform) -> Point;
}

/// The full rule triad.
pub trait ShapeRules: AxisRule + ProjectionRule + VertexSelectionRule {}

impl<T: AxisRule + ProjectionRule + VertexSelectionRule> ShapeRules for T {}

impl Geometry {
    /// The rule triad matching this geometry's kind.
    pub fn rules(&self) -> &dyn ShapeRules {
        match self {
            Geometry::Circle(circle) => circle,
            Geometry::Polygon(polygon) => polygon,
        }
    }
}

fn project_point(point: Point, axis_x: f64, axis_y: f64) -> f64 {
    point.x * axis_x + point.y * axis_y
}

// Circle

impl AxisRule for Circle {
    /// A single axis: from the transformed centre toward the other shape's
    /// closest point.
    fn axes(
        &self,
        transform: &Transform,
        other: &dyn ShapeRules,
        other_transform: &Transform,
    ) -> Vec<Vector2D> {
        let center = transform.apply(self.center);
        let closest = other.closest(center, other_transform);
        vec![Vector2D::connect(closest, center).normalized()]
    }
}

impl ProjectionRule for Circle {
    fn project(&self, transform: &Transform, axis: &Vector2D) -> Interval {
        let center = transform.apply(self.center);
        let c = project_point(center, axis.x(), axis.y());
        let r = transform.apply_length(self.radius);
        Interval::new(c - r, c + r)
    }
}

impl VertexSelectionRule for Circle {
    /// A circle has no vertices; its centre stands in for them.
    fn closest(&self, _point: Point, transform: &Transform) -> Point {
        transform.apply(self.center)
    }
}

// Polygon

impl AxisRule for Polygon {
    /// One normalized edge perpendicular per edge, closing edge included.
    fn axes(
        &self,
        transform: &Transform,
        _other: &dyn ShapeRules,
        _other_transform: &Transform,
    ) -> Vec<Vector2D> {
        self.edges()
            .map(|(start, end)| {
                let mut axis = Vector2D::connect(transform.apply(end), transform.apply(start));
                axis.perp();
                axis.normalized()
            })
            .collect()
    }
}

impl ProjectionRule for Polygon {
    fn project(&self, transform: &Transform, axis: &Vector2D) -> Interval {
        let (ax, ay) = (axis.x(), axis.y());
        if self.vertices.is_empty() {
            let p = project_point(transform.translation(), ax, ay);
            return Interval::new(p, p);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for vertex in &self.vertices {
            let p = project_point(transform.apply(*vertex), ax, ay);
            min = min.min(p);
            max = max.max(p);
        }
        Interval::new(min, max)
    }
}

impl VertexSelectionRule for Polygon {
    /// The transformed vertex nearest `point`; the first one wins ties.
    fn closest(&self, point: Point, transform: &Transform) -> Point {
        let mut best: Option<(Point, f64)> = None;
        for vertex in &self.vertices {
            let v = transform.apply(*vertex);
            let d = v.distance_squared(point);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((v, d));
            }
        }
        best.map(|(v, _)| v).unwrap_or_else(|| transform.translation())
    }
}
