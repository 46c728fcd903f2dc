use crate::collision::{CollisionResult, CollisionRule, SatCollisionRule};
use crate::common::config::{MotionRuleKind, WorldConfig};
use crate::integration::{MotionRule, SemiImplicitEuler, VelocityVerlet};
use crate::objects::body::{Body, BodyId};

use super::frame_pairs::FramePairs;

/// Returns mutable references to two distinct bodies, in argument order.
///
/// Panics if the indices are equal or out of bounds.
fn body_pair_mut(bodies: &mut [Body], idx_a: usize, idx_b: usize) -> (&mut Body, &mut Body) {
    assert!(idx_a != idx_b, "a body cannot collide with itself");
    assert!(
        idx_a < bodies.len() && idx_b < bodies.len(),
        "body index out of bounds"
    );

    // Ensure a < b for split_at_mut
    if idx_a < idx_b {
        let (slice_a, slice_b) = bodies.split_at_mut(idx_b);
        (&mut slice_a[idx_a], &mut slice_b[0])
    } else {
        let (slice_b, slice_a) = bodies.split_at_mut(idx_a);
        (&mut slice_a[0], &mut slice_b[idx_b])
    }
}

/// Owns the bodies of a simulation and advances them in fixed steps.
///
/// Each [`step`](Self::step) removes dead bodies flagged for destruction,
/// integrates the rest, resolves every overlapping pair at most once, and
/// finally resets the per-tick force accumulators.
pub struct World {
    width: f64,
    height: f64,
    bodies: Vec<Body>,
    removed_bodies: Vec<Body>,
    next_id: u64,
    motion_rule: Box<dyn MotionRule>,
    collision_rule: Box<dyn CollisionRule>,
    frame_pairs: FramePairs,
}

impl World {
    /// Creates an empty world using velocity Verlet and SAT collisions.
    ///
    /// The size is metadata only; bodies are free to leave it.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rules(
            width,
            height,
            Box::new(VelocityVerlet),
            Box::new(SatCollisionRule),
        )
    }

    /// Creates an empty world with the given integrator and collision rule.
    pub fn with_rules(
        width: f64,
        height: f64,
        motion_rule: Box<dyn MotionRule>,
        collision_rule: Box<dyn CollisionRule>,
    ) -> Self {
        log::debug!("created world {} x {}", width, height);
        Self {
            width,
            height,
            bodies: Vec::new(),
            removed_bodies: Vec::new(),
            next_id: 0,
            motion_rule,
            collision_rule,
            frame_pairs: FramePairs::new(),
        }
    }

    /// Creates an empty world sized and configured by `config`.
    pub fn from_config(config: &WorldConfig) -> Self {
        let motion_rule: Box<dyn MotionRule> = match config.motion_rule {
            MotionRuleKind::VelocityVerlet => Box::new(VelocityVerlet),
            MotionRuleKind::Euler => Box::new(SemiImplicitEuler),
        };
        Self::with_rules(
            config.width,
            config.height,
            motion_rule,
            Box::new(SatCollisionRule),
        )
    }

    /// Adds a body to the world and returns its newly assigned ID.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.attach(id);
        body.update_transform();
        log::debug!("added body {} at {:?}", id, body.position());
        self.bodies.push(body);
        id
    }

    /// Advances the simulation by one timestep of `delta_time` milliseconds.
    pub fn step(&mut self, delta_time: f64) {
        // 1. Remove destroyed bodies and integrate the rest
        let bodies = std::mem::take(&mut self.bodies);
        let mut live = Vec::with_capacity(bodies.len());
        for mut body in bodies {
            if body.is_dead() && body.destroy_on_death() {
                body.detach();
                if let Some(id) = body.id() {
                    log::debug!("removed body {}", id);
                }
                self.removed_bodies.push(body);
                continue;
            }
            body.update_transform();
            self.motion_rule.integrate(delta_time, &mut body);
            body.update_transform();
            live.push(body);
        }
        self.bodies = live;

        // 2. Detect and resolve collisions
        self.resolve_collisions();

        // 3. Reset per-tick state
        log::trace!("tested {} body pairs", self.frame_pairs.len());
        for body in self.bodies.iter_mut() {
            body.clear_forces();
        }
        self.frame_pairs.clear();
    }

    /// Tests every ordered pair of bodies, skipping pairs already handled
    /// this tick, and resolves each overlap immediately.
    fn resolve_collisions(&mut self) {
        let count = self.bodies.len();
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let (Some(first_id), Some(second_id)) = (self.bodies[i].id(), self.bodies[j].id())
                else {
                    continue;
                };
                if !self.frame_pairs.mark(first_id, second_id) {
                    continue;
                }

                let result = self
                    .collision_rule
                    .is_collision(&self.bodies[i], &self.bodies[j]);
                if let CollisionResult::Overlapping { mtv } = result {
                    log::trace!(
                        "resolving collision {} / {} with mtv {:?}",
                        first_id,
                        second_id,
                        mtv
                    );
                    let (first, second) = body_pair_mut(&mut self.bodies, i, j);
                    self.collision_rule.resolve_collision(first, second, &mtv);
                    first.update_transform();
                    second.update_transform();
                }
            }
        }
    }

    /// Live bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        let index = self.index_of(id)?;
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let index = self.index_of(id)?;
        self.bodies.get_mut(index)
    }

    // IDs are assigned in insertion order and removal keeps the order, so
    // the live list stays sorted by ID.
    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies
            .binary_search_by_key(&Some(id), |body| body.id())
            .ok()
    }

    /// Bodies removed since the last [`clear_removed_bodies`](Self::clear_removed_bodies).
    pub fn removed_bodies(&self) -> &[Body] {
        &self.removed_bodies
    }

    pub fn clear_removed_bodies(&mut self) {
        self.removed_bodies.clear();
    }

    /// Hands the removed bodies over to the caller, leaving the list empty.
    pub fn take_removed_bodies(&mut self) -> Vec<Body> {
        std::mem::take(&mut self.removed_bodies)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::from_config(&WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::Point;
    use crate::math::vector2d::Vector2D;
    use crate::objects::body::{BodyBuilder, INFINITE_MASS};
    use crate::shapes::{Ellipse, Rectangle};
    use std::cell::Cell;
    use std::rc::Rc;

    const EPSILON: f64 = 1e-9;
    const DT: f64 = 1000.0 / 60.0;

    // Helper
    fn ball(x: f64, y: f64) -> Body {
        BodyBuilder::new()
            .shape(Ellipse::circle(Point::ORIGIN, 1.0))
            .position(Point::new(x, y))
            .build()
            .unwrap()
    }

    struct CountingMotion(Rc<Cell<usize>>);

    impl MotionRule for CountingMotion {
        fn integrate(&self, _delta_time: f64, _body: &mut Body) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_world_new() {
        let world = World::new(800.0, 600.0);
        assert!(world.is_empty());
        assert_eq!(world.width(), 800.0);
        assert_eq!(world.height(), 600.0);
        assert!(world.removed_bodies().is_empty());
    }

    #[test]
    fn test_add_body_assigns_sequential_ids() {
        let mut world = World::default();
        let id1 = world.add_body(ball(0.0, 0.0));
        let id2 = world.add_body(ball(10.0, 0.0));
        assert_eq!(id1, BodyId(0));
        assert_eq!(id2, BodyId(1));
        assert_eq!(world.len(), 2);
        assert!(world.body(id2).unwrap().is_in_world());
        assert_eq!(world.body(id2).unwrap().position(), Point::new(10.0, 0.0));
        assert!(world.body(BodyId(5)).is_none());
    }

    #[test]
    fn test_dead_bodies_removed_and_ids_not_reused() {
        let mut world = World::default();
        let doomed = world.add_body(
            BodyBuilder::new()
                .destroy_on_death(true)
                .build()
                .unwrap(),
        );
        let survivor = world.add_body(ball(50.0, 50.0));
        world.body_mut(doomed).unwrap().set_dead(true);
        // Dead but not destroyed on death: stays.
        world.body_mut(survivor).unwrap().set_dead(true);

        world.step(DT);

        assert_eq!(world.len(), 1);
        assert_eq!(world.bodies()[0].id(), Some(survivor));
        assert_eq!(world.removed_bodies().len(), 1);
        let removed = &world.removed_bodies()[0];
        assert_eq!(removed.id(), Some(doomed));
        assert!(!removed.is_in_world());

        let next = world.add_body(ball(100.0, 100.0));
        assert_eq!(next, BodyId(2));
        assert!(world.body(next).is_some());

        world.clear_removed_bodies();
        assert!(world.removed_bodies().is_empty());
    }

    #[test]
    fn test_take_removed_bodies() {
        let mut world = World::default();
        let id = world.add_body(BodyBuilder::new().destroy_on_death(true).build().unwrap());
        world.body_mut(id).unwrap().set_dead(true);
        world.step(DT);
        let removed = world.take_removed_bodies();
        assert_eq!(removed.len(), 1);
        assert!(world.removed_bodies().is_empty());
    }

    #[test]
    fn test_forces_reset_each_step() {
        let mut world = World::default();
        let id = world.add_body(ball(0.0, 0.0));
        {
            let body = world.body_mut(id).unwrap();
            body.apply_force(&Vector2D::cartesian(60.0, 0.0));
            body.apply_persistent_force(&Vector2D::cartesian(0.0, 30.0));
        }
        world.step(DT);
        let body = world.body(id).unwrap();
        assert!(body.net_force().x().abs() < EPSILON);
        assert!((body.net_force().y() - 30.0).abs() < EPSILON);
        assert!((body.velocity().x() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_injected_motion_rule() {
        let calls = Rc::new(Cell::new(0));
        let mut world = World::with_rules(
            100.0,
            100.0,
            Box::new(CountingMotion(calls.clone())),
            Box::new(SatCollisionRule),
        );
        world.add_body(ball(0.0, 0.0));
        world.add_body(ball(10.0, 0.0));
        world.step(DT);
        world.step(DT);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_from_config_uses_euler() {
        let config = WorldConfig {
            motion_rule: MotionRuleKind::Euler,
            ..WorldConfig::default()
        };
        let mut world = World::from_config(&config);
        let id = world.add_body(ball(0.0, 0.0));
        world
            .body_mut(id)
            .unwrap()
            .apply_force(&Vector2D::cartesian(1000.0, 0.0));
        world.step(1000.0);
        // Euler moves with the updated velocity: 1000 * 1 * 1.
        assert!((world.body(id).unwrap().position().x - 1000.0).abs() < EPSILON);
    }

    #[test]
    fn test_collision_updates_transforms() {
        let mut world = World::default();
        let ground = world.add_body(
            BodyBuilder::new()
                .mass(INFINITE_MASS)
                .shape(Rectangle::with_size(100.0, 10.0))
                .position(Point::new(0.0, 10.0))
                .build()
                .unwrap(),
        );
        let falling = world.add_body(
            BodyBuilder::new()
                .shape(Rectangle::with_size(10.0, 10.0))
                .position(Point::new(20.0, 1.0))
                .build()
                .unwrap(),
        );

        world.step(DT);

        let body = world.body(falling).unwrap();
        assert!((body.position().y - 0.0).abs() < EPSILON);
        assert_eq!(body.transform().translation(), body.position());
        assert!(!body.is_transform_stale());
        assert_eq!(world.body(ground).unwrap().position(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_later_pairs_see_earlier_corrections() {
        // Three boxes in a row: a overlaps b by 2, b overlaps c by 1.
        let mut world = World::default();
        let boxed = |x: f64| {
            BodyBuilder::new()
                .shape(Rectangle::with_size(10.0, 10.0))
                .position(Point::new(x, 0.0))
                .build()
                .unwrap()
        };
        let a = world.add_body(boxed(0.0));
        let b = world.add_body(boxed(8.0));
        let c = world.add_body(boxed(17.0));

        world.step(DT);

        // a/b pushes b to x = 10, so b/c is tested at an overlap of 3
        // rather than the 1 it had before the step.
        let x = |id| world.body(id).unwrap().position().x;
        assert!((x(a) + 2.0).abs() < EPSILON);
        assert!((x(b) - 7.0).abs() < EPSILON);
        assert!((x(c) - 20.0).abs() < EPSILON);
        for id in [a, b, c] {
            assert!(world.body(id).unwrap().position().y.abs() < EPSILON);
        }
    }

    #[test]
    fn test_body_pair_mut_order() {
        let mut bodies = vec![ball(0.0, 0.0), ball(1.0, 0.0), ball(2.0, 0.0)];
        let (a, b) = body_pair_mut(&mut bodies, 2, 0);
        assert_eq!(a.position().x, 2.0);
        assert_eq!(b.position().x, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_body_pair_mut_same_index() {
        let mut bodies = vec![ball(0.0, 0.0)];
        body_pair_mut(&mut bodies, 0, 0);
    }
}
