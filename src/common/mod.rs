pub mod config;
pub mod error;
pub mod material;

pub use config::{MotionRuleKind, WorldConfig};
pub use error::PhysicsError;
pub use material::Material;
