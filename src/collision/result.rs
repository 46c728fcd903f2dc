use crate::math::vector2d::Vector2D;

/// Outcome of a collision test between two bodies.
#[derive(Debug, Clone)]
pub enum CollisionResult {
    /// Some axis separates the bodies.
    Separated,
    /// The bodies overlap. `mtv` is the minimum translation vector, oriented
    /// to push the first body away from the second.
    Overlapping { mtv: Vector2D },
}

impl CollisionResult {
    pub fn is_collision(&self) -> bool {
        matches!(self, CollisionResult::Overlapping { .. })
    }

    pub fn mtv(&self) -> Option<&Vector2D> {
        match self {
            CollisionResult::Overlapping { mtv } => Some(mtv),
            CollisionResult::Separated => None,
        }
    }
}
