//! Fixed-timestep driver that decouples simulation steps from frame times.

use crate::common::config::WorldConfig;
use crate::common::error::PhysicsError;

use super::physics_world::World;

/// Accumulates elapsed frame time and releases it in fixed-size steps.
///
/// ```
/// use physics_core::world::{FixedTimestep, World};
///
/// let mut world = World::new(800.0, 600.0);
/// let mut clock = FixedTimestep::new(10.0, 250.0).unwrap();
/// assert_eq!(clock.run(&mut world, 35.0), 3);
/// assert_eq!(clock.accumulated(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    time_step: f64,
    max_frame_time: f64,
    accumulator: f64,
    elapsed_time: f64,
}

impl FixedTimestep {
    /// Both durations are in milliseconds and must be positive.
    pub fn new(time_step_ms: f64, max_frame_time_ms: f64) -> Result<Self, PhysicsError> {
        if !(time_step_ms.is_finite() && time_step_ms > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "time step must be positive, got {}",
                time_step_ms
            )));
        }
        if !(max_frame_time_ms.is_finite() && max_frame_time_ms > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "max frame time must be positive, got {}",
                max_frame_time_ms
            )));
        }
        Ok(Self {
            time_step: time_step_ms,
            max_frame_time: max_frame_time_ms,
            accumulator: 0.0,
            elapsed_time: 0.0,
        })
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self, PhysicsError> {
        Self::new(config.time_step_ms, config.max_frame_time_ms)
    }

    /// Adds a frame's elapsed time to the accumulator. Frames longer than
    /// the maximum frame time are clamped and the excess is dropped.
    pub fn advance(&mut self, frame_elapsed_ms: f64) {
        let mut frame = frame_elapsed_ms.max(0.0);
        if frame > self.max_frame_time {
            log::warn!(
                "frame took {:.1} ms, clamping to {:.1} ms",
                frame,
                self.max_frame_time
            );
            frame = self.max_frame_time;
        }
        self.accumulator += frame;
    }

    /// Consumes one timestep from the accumulator if enough time is stored.
    pub fn try_cycle(&mut self) -> bool {
        if self.accumulator >= self.time_step {
            self.accumulator -= self.time_step;
            self.elapsed_time += self.time_step;
            true
        } else {
            false
        }
    }

    /// Advances by one frame and steps `world` once per available timestep.
    /// Returns the number of steps taken, which may be zero.
    pub fn run(&mut self, world: &mut World, frame_elapsed_ms: f64) -> usize {
        self.advance(frame_elapsed_ms);
        let mut steps = 0;
        while self.try_cycle() {
            world.step(self.time_step);
            steps += 1;
        }
        steps
    }

    /// The fixed step in milliseconds.
    pub fn delta_time(&self) -> f64 {
        self.time_step
    }

    /// Total simulated time in milliseconds.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Time stored but not yet simulated, in milliseconds.
    pub fn accumulated(&self) -> f64 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_consume_accumulator() {
        let mut clock = FixedTimestep::new(10.0, 100.0).unwrap();
        clock.advance(25.0);
        assert!(clock.try_cycle());
        assert!(clock.try_cycle());
        assert!(!clock.try_cycle());
        assert_eq!(clock.accumulated(), 5.0);
        assert_eq!(clock.elapsed_time(), 20.0);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut clock = FixedTimestep::new(10.0, 50.0).unwrap();
        let mut world = World::new(100.0, 100.0);
        assert_eq!(clock.run(&mut world, 1000.0), 5);
        assert_eq!(clock.accumulated(), 0.0);
        assert_eq!(clock.elapsed_time(), 50.0);
    }

    #[test]
    fn test_short_frames_may_take_no_step() {
        let mut clock = FixedTimestep::new(10.0, 50.0).unwrap();
        let mut world = World::new(100.0, 100.0);
        assert_eq!(clock.run(&mut world, 4.0), 0);
        assert_eq!(clock.run(&mut world, 4.0), 0);
        assert_eq!(clock.run(&mut world, 4.0), 1);
        assert_eq!(clock.run(&mut world, -3.0), 0);
    }

    #[test]
    fn test_invalid_durations_rejected() {
        assert!(FixedTimestep::new(0.0, 50.0).is_err());
        assert!(FixedTimestep::new(10.0, f64::NAN).is_err());
        assert!(FixedTimestep::new(-1.0, 50.0).is_err());
    }

    #[test]
    fn test_from_config() {
        let clock = FixedTimestep::from_config(&WorldConfig::default()).unwrap();
        assert!((clock.delta_time() - 1000.0 / 60.0).abs() < 1e-12);
    }
}
