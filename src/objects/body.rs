use std::fmt;

use crate::collision::collider::Collider;
use crate::common::error::PhysicsError;
use crate::common::material::Material;
use crate::math::point::Point;
use crate::math::transform::Transform;
use crate::math::vector2d::Vector2D;
use crate::shapes::Shape;

/// Mass value marking a body as immovable.
pub const INFINITE_MASS: f64 = 0.0;

/// Identifier a world assigns to a body when it is added.
///
/// IDs increase monotonically within a world and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rigid body: collider, kinematic state, force accumulators and a cached
/// local-to-world transform.
///
/// Angles are in degrees, with a radians mirror kept in step by
/// [`set_angle`](Self::set_angle). Velocities are per second.
#[derive(Debug, Clone)]
pub struct Body {
    collider: Collider,

    position: Point,
    velocity: Vector2D,
    angle: f64,
    angle_radians: f64,
    angular_velocity: f64,
    angular_acceleration: f64,
    torque: f64,
    scale: f64,

    // Transient force, reseeded from the persistent force every tick.
    net_force: Vector2D,
    persistent_net_force: Vector2D,

    mass: f64,
    reciprocal_mass: f64,

    dead: bool,
    destroy_on_death: bool,

    id: Option<BodyId>,
    in_world: bool,

    transform: Transform,
    position_stale: bool,
    angle_stale: bool,
    scale_stale: bool,
}

impl Body {
    /// Starts a [`BodyBuilder`] with default settings.
    pub fn builder() -> BodyBuilder {
        BodyBuilder::new()
    }

    // forces

    /// Adds `force` to the net force for the current tick only.
    pub fn apply_force(&mut self, force: &Vector2D) {
        self.net_force.add(force);
    }

    /// Adds `force` to the persistent force, which is fed into the net force
    /// at the start of every following tick.
    pub fn apply_persistent_force(&mut self, force: &Vector2D) {
        self.persistent_net_force.add(force);
    }

    /// Resets the net force to the persistent force.
    pub(crate) fn clear_forces(&mut self) {
        self.net_force.clear();
        self.net_force.add(&self.persistent_net_force);
    }

    /// Net force scaled by the reciprocal mass. Always zero for an
    /// infinite-mass body.
    pub fn acceleration(&self) -> Vector2D {
        self.net_force.clone().scaled(self.reciprocal_mass)
    }

    // world membership

    pub(crate) fn attach(&mut self, id: BodyId) {
        self.id = Some(id);
        self.in_world = true;
    }

    /// Severs the link to the world. The ID is kept so callers can still
    /// match the removed body against their own records.
    pub(crate) fn detach(&mut self) {
        self.in_world = false;
    }

    // transform

    /// Rebuilds the cached transform if the position, angle or scale changed
    /// since the last rebuild.
    pub fn update_transform(&mut self) {
        if self.position_stale || self.angle_stale || self.scale_stale {
            self.transform = Transform::new(self.position, self.angle_radians, self.scale);
            self.position_stale = false;
            self.angle_stale = false;
            self.scale_stale = false;
        }
    }

    /// Whether a field feeding the transform changed since the last rebuild.
    pub fn is_transform_stale(&self) -> bool {
        self.position_stale || self.angle_stale || self.scale_stale
    }

    // getters

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> &Vector2D {
        &self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Vector2D {
        &mut self.velocity
    }

    pub fn net_force(&self) -> &Vector2D {
        &self.net_force
    }

    pub fn persistent_net_force(&self) -> &Vector2D {
        &self.persistent_net_force
    }

    /// Orientation in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_radians
    }

    /// Degrees per second.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Degrees per second squared.
    pub fn angular_acceleration(&self) -> f64 {
        self.angular_acceleration
    }

    /// Stored for callers; the integrators do not read it.
    pub fn torque(&self) -> f64 {
        self.torque
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn reciprocal_mass(&self) -> f64 {
        self.reciprocal_mass
    }

    pub fn is_infinite_mass(&self) -> bool {
        self.reciprocal_mass == 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn destroy_on_death(&self) -> bool {
        self.destroy_on_death
    }

    /// The ID assigned by the world, or `None` if the body was never added.
    pub fn id(&self) -> Option<BodyId> {
        self.id
    }

    pub fn is_in_world(&self) -> bool {
        self.in_world
    }

    /// The cached transform. May lag behind setters until
    /// [`update_transform`](Self::update_transform) runs.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    // setters

    pub fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.position_stale = true;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.translate(dx, dy);
        self.position_stale = true;
    }

    /// Sets the orientation in degrees.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.angle_radians = angle.to_radians();
        self.angle_stale = true;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    pub fn set_angular_acceleration(&mut self, angular_acceleration: f64) {
        self.angular_acceleration = angular_acceleration;
    }

    pub fn set_torque(&mut self, torque: f64) {
        self.torque = torque;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.scale_stale = true;
    }

    /// Marks the body dead. A dead body that is destroyed on death is
    /// removed from its world at the start of the next step.
    pub fn set_dead(&mut self, dead: bool) {
        self.dead = dead;
    }
}

/// Configures and validates a [`Body`].
///
/// ```
/// use physics_core::objects::BodyBuilder;
/// use physics_core::shapes::Rectangle;
/// use physics_core::math::Point;
///
/// let body = BodyBuilder::new()
///     .mass(2.0)
///     .shape(Rectangle::with_size(50.0, 50.0))
///     .position(Point::new(400.0, 50.0))
///     .build()
///     .unwrap();
/// assert_eq!(body.reciprocal_mass(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    mass: f64,
    material: Material,
    shape: Shape,
    position: Point,
    destroy_on_death: bool,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self {
            mass: 1.0,
            material: Material::DEFAULT,
            shape: Shape::default(),
            position: Point::ORIGIN,
            destroy_on_death: false,
        }
    }
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mass of the body. [`INFINITE_MASS`] (zero) makes it immovable.
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn destroy_on_death(mut self, destroy_on_death: bool) -> Self {
        self.destroy_on_death = destroy_on_death;
        self
    }

    /// Validates the mass and shape and builds the body with its transform
    /// already computed.
    pub fn build(self) -> Result<Body, PhysicsError> {
        // Written to also reject NaN.
        if !(self.mass >= 0.0) {
            return Err(PhysicsError::NegativeMass(self.mass));
        }
        let collider = Collider::new(self.shape, self.material)?;
        let reciprocal_mass = if self.mass == INFINITE_MASS {
            0.0
        } else {
            1.0 / self.mass
        };

        let mut body = Body {
            collider,
            position: self.position,
            velocity: Vector2D::zero(),
            angle: 0.0,
            angle_radians: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            torque: 0.0,
            scale: 1.0,
            net_force: Vector2D::zero(),
            persistent_net_force: Vector2D::zero(),
            mass: self.mass,
            reciprocal_mass,
            dead: false,
            destroy_on_death: self.destroy_on_death,
            id: None,
            in_world: false,
            transform: Transform::identity(),
            position_stale: true,
            angle_stale: false,
            scale_stale: false,
        };
        body.update_transform();
        Ok(body)
    }
}
