pub mod integrator;

pub use integrator::{MotionRule, SemiImplicitEuler, VelocityVerlet};
