//! Defines physical material properties.

use serde::{Deserialize, Serialize};

/// Describes how a collider's surface responds to impacts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Coefficient of restitution (bounciness).
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    restitution: f64,
    /// Density in kg/m^2.
    density: f64,
}

impl Material {
    /// The material used by colliders that do not name one: perfectly
    /// elastic with unit density.
    pub const DEFAULT: Material = Material {
        restitution: 1.0,
        density: 1.0,
    };

    /// Creates a new material with the given restitution and density.
    ///
    /// Values are stored as given, so a material built here and one read
    /// from JSON with the same numbers are equal.
    pub fn new(restitution: f64, density: f64) -> Self {
        Material {
            restitution,
            density,
        }
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::DEFAULT
    }
}
