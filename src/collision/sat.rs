//! Discrete collision detection with the separating axis theorem.

use crate::math::vector2d::Vector2D;
use crate::objects::body::Body;

use super::result::CollisionResult;

/// Detects and resolves collisions between pairs of bodies.
pub trait CollisionRule {
    /// Tests two bodies against their cached transforms.
    fn is_collision(&self, first: &Body, second: &Body) -> CollisionResult;

    /// Separates two overlapping bodies and exchanges impulse between them.
    /// `mtv` is the translation that pushes `first` out of `second`.
    fn resolve_collision(&self, first: &mut Body, second: &mut Body, mtv: &Vector2D);
}

/// SAT detection with mass-weighted positional correction and a
/// restitution impulse along the collision normal.
///
/// The axes supplied by each body are tested as two separate passes, and
/// both passes must find overlap on every one of their axes for the bodies
/// to collide. The reported MTV is the smaller of the two passes' minimum
/// overlaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatCollisionRule;

impl SatCollisionRule {
    pub fn new() -> Self {
        Self
    }

    /// Projects both bodies onto every axis. Returns `None` on the first
    /// separating axis, otherwise the smallest overlap along its axis.
    fn overlap_for_axes(axes: &[Vector2D], first: &Body, second: &Body) -> Option<Vector2D> {
        let first_rules = first.collider().rules();
        let second_rules = second.collider().rules();

        let mut mtv: Option<Vector2D> = None;
        for axis in axes {
            let a = first_rules.project(first.transform(), axis);
            let b = second_rules.project(second.transform(), axis);
            if !a.overlaps(&b) {
                return None;
            }
            let overlap = a.overlap(&b);
            if mtv.as_ref().map_or(true, |current| overlap < current.magnitude()) {
                mtv = Some(Vector2D::polar(overlap, axis.direction()));
            }
        }
        // An empty axis set cannot separate anything.
        Some(mtv.unwrap_or_else(Vector2D::zero))
    }

    fn axes(from: &Body, against: &Body) -> Vec<Vector2D> {
        from.collider().rules().axes(
            from.transform(),
            against.collider().rules(),
            against.transform(),
        )
    }
}

/// Share of the positional correction `body` takes when pushed out of `other`.
fn correction_fraction(body: &Body, other: &Body) -> f64 {
    if body.is_infinite_mass() {
        0.0
    } else if other.is_infinite_mass() {
        1.0
    } else {
        other.mass() / body.mass()
    }
}

impl CollisionRule for SatCollisionRule {
    fn is_collision(&self, first: &Body, second: &Body) -> CollisionResult {
        let first_axes = Self::axes(first, second);
        let second_axes = Self::axes(second, first);

        let first_mtv = match Self::overlap_for_axes(&first_axes, first, second) {
            Some(mtv) => mtv,
            None => return CollisionResult::Separated,
        };
        let second_mtv = match Self::overlap_for_axes(&second_axes, first, second) {
            Some(mtv) => mtv,
            None => return CollisionResult::Separated,
        };

        let mut mtv = if first_mtv.magnitude() > second_mtv.magnitude() {
            second_mtv
        } else {
            first_mtv
        };

        // Point the MTV from the second body toward the first.
        let centers = Vector2D::connect(first.position(), second.position());
        if centers.dot(&mtv) < 0.0 {
            let direction = mtv.direction();
            mtv.set_direction(direction + 180.0);
        }

        CollisionResult::Overlapping { mtv }
    }

    fn resolve_collision(&self, first: &mut Body, second: &mut Body, mtv: &Vector2D) {
        let first_fraction = correction_fraction(first, second);
        let second_fraction = correction_fraction(second, first);

        let (dx, dy) = (mtv.x(), mtv.y());
        first.translate(first_fraction * dx, first_fraction * dy);
        second.translate(-second_fraction * dx, -second_fraction * dy);

        let combined_reciprocal_mass = first.reciprocal_mass() + second.reciprocal_mass();
        if combined_reciprocal_mass == 0.0 {
            return;
        }

        let mut relative_velocity = first.velocity().clone();
        relative_velocity.subtract(second.velocity());

        let normal = mtv.clone().normalized();
        let velocity_along_normal = relative_velocity.dot_polar(&normal);

        let restitution = first
            .collider()
            .material()
            .restitution()
            .min(second.collider().material().restitution());

        let impulse = normal
            .scaled(velocity_along_normal)
            .scaled(-(1.0 + restitution));

        let first_impulse = impulse
            .clone()
            .scaled(first.reciprocal_mass() / combined_reciprocal_mass);
        let second_impulse = impulse.scaled(second.reciprocal_mass() / combined_reciprocal_mass);

        first.velocity_mut().add(&first_impulse);
        second.velocity_mut().subtract(&second_impulse);
    }
}
