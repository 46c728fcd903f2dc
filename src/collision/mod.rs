pub mod collider;
pub mod result;
pub mod rules;
pub mod sat;

// Re-export key types
pub use collider::Collider;
pub use result::CollisionResult;
pub use rules::{AxisRule, ProjectionRule, ShapeRules, VertexSelectionRule};
pub use sat::{CollisionRule, SatCollisionRule};
