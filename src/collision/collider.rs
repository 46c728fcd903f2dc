use crate::common::error::PhysicsError;
use crate::common::material::Material;
use crate::shapes::{Geometry, Shape};

use super::rules::ShapeRules;

/// The collision surface of a body: its outline, the normalized geometry
/// derived from it, and a material.
///
/// The geometry (and with it the rule triad) is fixed when the collider is
/// built; a collider never holds a shape that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    shape: Shape,
    geometry: Geometry,
    material: Material,
}

impl Collider {
    /// Validates `shape` and builds a collider from it.
    pub fn new(shape: Shape, material: Material) -> Result<Self, PhysicsError> {
        let geometry = Geometry::from_shape(&shape)?;
        Ok(Self {
            shape,
            geometry,
            material,
        })
    }

    /// The outline as it was supplied.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn rules(&self) -> &dyn ShapeRules {
        self.geometry.rules()
    }
}
