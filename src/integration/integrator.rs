use crate::objects::body::Body;

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Advances a body's kinematic state by one timestep.
pub trait MotionRule {
    /// `delta_time` is in milliseconds.
    fn integrate(&self, delta_time: f64, body: &mut Body);
}

/// Velocity Verlet using the acceleration at the start of the step.
///
/// Position moves by `v*dt + a*dt^2/2`, then velocity gains `a*dt`. Angular
/// motion follows the same two steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl MotionRule for VelocityVerlet {
    fn integrate(&self, delta_time: f64, body: &mut Body) {
        let dt = delta_time / MILLIS_PER_SECOND;
        let half_dt_squared = 0.5 * dt * dt;

        // --- Linear Motion --- //
        let acceleration = body.acceleration();
        let (vx, vy) = (body.velocity().x(), body.velocity().y());
        let (ax, ay) = (acceleration.x(), acceleration.y());
        body.translate(vx * dt + ax * half_dt_squared, vy * dt + ay * half_dt_squared);
        body.velocity_mut().add(&acceleration.scaled(dt));

        // --- Angular Motion --- //
        let omega = body.angular_velocity();
        let alpha = body.angular_acceleration();
        body.set_angle(body.angle() + omega * dt + alpha * half_dt_squared);
        body.set_angular_velocity(omega + alpha * dt);
    }
}

/// Semi-implicit Euler: velocity first, then position from the new velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl MotionRule for SemiImplicitEuler {
    fn integrate(&self, delta_time: f64, body: &mut Body) {
        let dt = delta_time / MILLIS_PER_SECOND;

        // --- Linear Motion --- //
        let acceleration = body.acceleration();
        body.velocity_mut().add(&acceleration.scaled(dt));
        let (vx, vy) = (body.velocity().x(), body.velocity().y());
        body.translate(vx * dt, vy * dt);

        // --- Angular Motion --- //
        let omega = body.angular_velocity() + body.angular_acceleration() * dt;
        body.set_angular_velocity(omega);
        body.set_angle(body.angle() + omega * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::Point;
    use crate::math::vector2d::Vector2D;
    use crate::objects::body::{BodyBuilder, INFINITE_MASS};
    use crate::shapes::Rectangle;

    const EPSILON: f64 = 1e-9;

    fn test_body(mass: f64) -> Body {
        BodyBuilder::new()
            .mass(mass)
            .shape(Rectangle::with_size(1.0, 1.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_verlet_constant_velocity() {
        let mut body = test_body(1.0);
        body.set_velocity(Vector2D::cartesian(10.0, -5.0));

        VelocityVerlet.integrate(100.0, &mut body);

        assert!((body.position().x - 1.0).abs() < EPSILON);
        assert!((body.position().y + 0.5).abs() < EPSILON);
        assert!((body.velocity().x() - 10.0).abs() < EPSILON);
        assert!((body.velocity().y() + 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_verlet_constant_force() {
        let mut body = test_body(2.0);
        body.apply_force(&Vector2D::cartesian(10.0, 0.0)); // a = (5, 0)

        VelocityVerlet.integrate(1000.0, &mut body);

        // x = a*t^2/2, v = a*t
        assert!((body.position().x - 2.5).abs() < EPSILON);
        assert!((body.velocity().x() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_verlet_angular() {
        let mut body = test_body(1.0);
        body.set_angular_velocity(10.0);
        body.set_angular_acceleration(4.0);

        VelocityVerlet.integrate(500.0, &mut body);

        // 10*0.5 + 0.5*4*0.25
        assert!((body.angle() - 5.5).abs() < EPSILON);
        assert!((body.angular_velocity() - 12.0).abs() < EPSILON);
        assert!((body.angle_radians() - 5.5f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_euler_constant_force() {
        let mut body = test_body(2.0);
        body.apply_force(&Vector2D::cartesian(10.0, 0.0));

        SemiImplicitEuler.integrate(1000.0, &mut body);

        // Velocity first, so the full step uses v = 5.
        assert!((body.velocity().x() - 5.0).abs() < EPSILON);
        assert!((body.position().x - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_euler_angular() {
        let mut body = test_body(1.0);
        body.set_angular_acceleration(2.0);

        SemiImplicitEuler.integrate(1000.0, &mut body);

        assert!((body.angular_velocity() - 2.0).abs() < EPSILON);
        assert!((body.angle() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_infinite_mass_keeps_velocity() {
        let mut body = test_body(INFINITE_MASS);
        body.apply_force(&Vector2D::cartesian(100.0, 0.0));
        body.set_velocity(Vector2D::cartesian(1.0, 0.0));

        VelocityVerlet.integrate(1000.0, &mut body);

        assert!((body.position().x - 1.0).abs() < EPSILON);
        assert!((body.velocity().x() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_integration_marks_transform_stale() {
        let mut body = test_body(1.0);
        body.set_velocity(Vector2D::cartesian(60.0, 0.0));
        SemiImplicitEuler.integrate(1000.0, &mut body);
        assert!(body.is_transform_stale());
        body.update_transform();
        assert_eq!(body.transform().translation(), Point::new(60.0, 0.0));
    }
}
