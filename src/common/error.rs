//! Error types for body, collider and configuration construction.

use std::fmt;

/// Errors raised while building simulation entities or loading configuration.
///
/// Every variant is a construction-time failure: the entity being built is
/// never produced. Stepping a world cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be zero (infinite mass) or positive.
    NegativeMass(f64),
    /// Only circular ellipses are supported.
    NonCircularEllipse { width: f64, height: f64 },
    /// A shape extent was negative.
    NegativeDimensions { width: f64, height: f64 },
    /// A polygon path contained a curved segment.
    NonPolygonalSegment { index: usize },
    /// A polygon path produced no vertices.
    DegenerateShape,
    /// A configuration document could not be used.
    InvalidConfig(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::NegativeMass(mass) => {
                write!(f, "mass of a body must be >= 0 (got {})", mass)
            }
            PhysicsError::NonCircularEllipse { width, height } => write!(
                f,
                "only circles are supported, got an ellipse of {} x {}",
                width, height
            ),
            PhysicsError::NegativeDimensions { width, height } => {
                write!(f, "shape dimensions must be >= 0 (got {} x {})", width, height)
            }
            PhysicsError::NonPolygonalSegment { index } => {
                write!(f, "path segment {} is curved; polygons need straight edges", index)
            }
            PhysicsError::DegenerateShape => write!(f, "polygon has no vertices"),
            PhysicsError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for PhysicsError {}
