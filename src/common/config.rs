//! Configuration for building worlds and their fixed-timestep drivers.

use serde::{Deserialize, Serialize};

use super::error::PhysicsError;

/// Which integrator a world advances its bodies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionRuleKind {
    #[default]
    VelocityVerlet,
    Euler,
}

/// World and timing settings.
///
/// Every field has a default, so a configuration document only needs to name
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width. Advisory only; bodies are not confined to it.
    pub width: f64,
    /// World height. Advisory only.
    pub height: f64,
    /// Fixed simulation step in milliseconds.
    pub time_step_ms: f64,
    /// Longest frame the accumulator will absorb; anything beyond is dropped.
    pub max_frame_time_ms: f64,
    /// Integrator used by the world.
    pub motion_rule: MotionRuleKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            time_step_ms: 1000.0 / 60.0,
            max_frame_time_ms: 250.0,
            motion_rule: MotionRuleKind::VelocityVerlet,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let config: WorldConfig =
            serde_json::from_str(json).map_err(|e| PhysicsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        log::debug!("loaded world config: {:?}", config);
        Ok(config)
    }

    /// Checks that the dimensions and timings are usable.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.width >= 0.0 && self.height >= 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "world size must be non-negative, got {} x {}",
                self.width, self.height
            )));
        }
        if !(self.time_step_ms.is_finite() && self.time_step_ms > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "time_step_ms must be positive, got {}",
                self.time_step_ms
            )));
        }
        if !(self.max_frame_time_ms.is_finite() && self.max_frame_time_ms > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_frame_time_ms must be positive, got {}",
                self.max_frame_time_ms
            )));
        }
        Ok(())
    }
}
