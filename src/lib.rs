//! A deterministic, fixed-step 2D rigid-body physics core.
//!
//! Bodies carry a [`Collider`] built from a circle, rectangle or
//! straight-edged path. A [`World`] integrates them with a pluggable
//! [`MotionRule`] and resolves overlaps found by separating axis tests
//! through a pluggable [`CollisionRule`].

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Collider, CollisionResult, CollisionRule, SatCollisionRule};
pub use common::{Material, MotionRuleKind, PhysicsError, WorldConfig};
pub use integration::{MotionRule, SemiImplicitEuler, VelocityVerlet};
pub use math::{Interval, Point, Transform, Vector2D};
pub use objects::{Body, BodyBuilder, BodyId, INFINITE_MASS};
pub use shapes::{Ellipse, Path, PathSegment, Rectangle, Shape};
pub use world::{FixedTimestep, World};
