//! A 2D vector that keeps both a polar and a cartesian representation.
//!
//! Only one representation is authoritative at a time. Writing through one
//! form marks the other stale, and the stale form is recomputed the next time
//! it is read. Reads take `&self`, so the synchronised values live in `Cell`s.

use std::cell::Cell;
use std::fmt;

use super::point::Point;

const DEGREES_PER_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Polar {
    magnitude: f64,
    /// Degrees, always in [0, 360).
    direction: f64,
    radians: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cartesian {
    x: f64,
    y: f64,
}

/// Which representation, if any, is out of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stale {
    Neither,
    Polar,
    Cartesian,
}

/// Wraps an angle in degrees into [0, 360).
fn normalize_degrees(direction: f64) -> f64 {
    let mut wrapped = direction % DEGREES_PER_CIRCLE;
    if wrapped < 0.0 {
        wrapped += DEGREES_PER_CIRCLE;
    }
    // -1e-15 % 360 + 360 rounds to exactly 360.
    if wrapped >= DEGREES_PER_CIRCLE {
        wrapped = 0.0;
    }
    wrapped
}

/// A vector with lazily synchronised polar (magnitude, direction in degrees)
/// and cartesian (x, y) coordinates.
///
/// Cloning copies the staleness state along with both representations, so a
/// clone behaves exactly like the original on its next read.
#[derive(Clone)]
pub struct Vector2D {
    polar: Cell<Polar>,
    cartesian: Cell<Cartesian>,
    stale: Cell<Stale>,
}

impl Vector2D {
    /// The zero vector (magnitude 0, direction 0).
    pub fn zero() -> Self {
        Self::polar(0.0, 0.0)
    }

    /// Creates a vector from a magnitude and a direction in degrees.
    pub fn polar(magnitude: f64, direction: f64) -> Self {
        let direction = normalize_degrees(direction);
        Self {
            polar: Cell::new(Polar {
                magnitude,
                direction,
                radians: direction.to_radians(),
            }),
            cartesian: Cell::new(Cartesian { x: 0.0, y: 0.0 }),
            stale: Cell::new(Stale::Cartesian),
        }
    }

    /// Creates a vector from cartesian coordinates.
    pub fn cartesian(x: f64, y: f64) -> Self {
        Self {
            polar: Cell::new(Polar {
                magnitude: 0.0,
                direction: 0.0,
                radians: 0.0,
            }),
            cartesian: Cell::new(Cartesian { x, y }),
            stale: Cell::new(Stale::Polar),
        }
    }

    /// The displacement that moves `from` onto `to`.
    pub fn connect(to: Point, from: Point) -> Self {
        Self::from(to - from)
    }

    fn sync_cartesian(&self) -> Cartesian {
        if self.stale.get() == Stale::Cartesian {
            let polar = self.polar.get();
            self.cartesian.set(Cartesian {
                x: polar.radians.cos() * polar.magnitude,
                y: polar.radians.sin() * polar.magnitude,
            });
            self.stale.set(Stale::Neither);
        }
        self.cartesian.get()
    }

    fn sync_polar(&self) -> Polar {
        if self.stale.get() == Stale::Polar {
            let cartesian = self.cartesian.get();
            let magnitude = (cartesian.x * cartesian.x + cartesian.y * cartesian.y).sqrt();
            let direction = normalize_degrees(cartesian.y.atan2(cartesian.x).to_degrees());
            self.polar.set(Polar {
                magnitude,
                direction,
                radians: direction.to_radians(),
            });
            self.stale.set(Stale::Neither);
        }
        self.polar.get()
    }

    fn write_polar(&mut self, polar: Polar) {
        self.polar.set(polar);
        self.stale.set(Stale::Cartesian);
    }

    fn write_cartesian(&mut self, cartesian: Cartesian) {
        self.cartesian.set(cartesian);
        self.stale.set(Stale::Polar);
    }

    // getters

    pub fn magnitude(&self) -> f64 {
        self.sync_polar().magnitude
    }

    pub fn magnitude_squared(&self) -> f64 {
        let c = self.sync_cartesian();
        c.x * c.x + c.y * c.y
    }

    /// Direction in degrees, in [0, 360).
    pub fn direction(&self) -> f64 {
        self.sync_polar().direction
    }

    pub fn direction_radians(&self) -> f64 {
        self.sync_polar().radians
    }

    pub fn x(&self) -> f64 {
        self.sync_cartesian().x
    }

    pub fn y(&self) -> f64 {
        self.sync_cartesian().y
    }

    /// The point this vector reaches when drawn from the origin.
    pub fn to_point(&self) -> Point {
        let c = self.sync_cartesian();
        Point::new(c.x, c.y)
    }

    // setters

    pub fn set_magnitude(&mut self, magnitude: f64) {
        let polar = self.sync_polar();
        self.write_polar(Polar { magnitude, ..polar });
    }

    pub fn set_direction(&mut self, direction: f64) {
        let polar = self.sync_polar();
        let direction = normalize_degrees(direction);
        self.write_polar(Polar {
            magnitude: polar.magnitude,
            direction,
            radians: direction.to_radians(),
        });
    }

    pub fn set_x(&mut self, x: f64) {
        let c = self.sync_cartesian();
        self.write_cartesian(Cartesian { x, ..c });
    }

    pub fn set_y(&mut self, y: f64) {
        let c = self.sync_cartesian();
        self.write_cartesian(Cartesian { y, ..c });
    }

    pub fn set_cartesian(&mut self, x: f64, y: f64) {
        self.write_cartesian(Cartesian { x, y });
    }

    pub fn set_polar(&mut self, magnitude: f64, direction: f64) {
        let direction = normalize_degrees(direction);
        self.write_polar(Polar {
            magnitude,
            direction,
            radians: direction.to_radians(),
        });
    }

    /// Copies another vector, staleness included.
    pub fn set(&mut self, other: &Vector2D) {
        self.clone_from(other);
    }

    /// Sets magnitude and direction to 0.
    pub fn clear(&mut self) {
        self.set_polar(0.0, 0.0);
    }

    // arithmetic

    pub fn add(&mut self, other: &Vector2D) {
        let a = self.sync_cartesian();
        let b = other.sync_cartesian();
        self.write_cartesian(Cartesian {
            x: a.x + b.x,
            y: a.y + b.y,
        });
    }

    pub fn subtract(&mut self, other: &Vector2D) {
        let a = self.sync_cartesian();
        let b = other.sync_cartesian();
        self.write_cartesian(Cartesian {
            x: a.x - b.x,
            y: a.y - b.y,
        });
    }

    /// Scales the magnitude by `|scalar|`. A negative scalar reverses the
    /// direction by 180 degrees rather than negating the coordinates.
    pub fn scale(&mut self, scalar: f64) {
        let polar = self.sync_polar();
        let direction = if scalar < 0.0 {
            normalize_degrees(polar.direction - 180.0)
        } else {
            polar.direction
        };
        self.write_polar(Polar {
            magnitude: polar.magnitude * scalar.abs(),
            direction,
            radians: direction.to_radians(),
        });
    }

    /// Consuming form of [`scale`](Self::scale).
    pub fn scaled(mut self, scalar: f64) -> Self {
        self.scale(scalar);
        self
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        let a = self.sync_cartesian();
        let b = other.sync_cartesian();
        a.x * b.x + a.y * b.y
    }

    /// `|a||b|cos(angle between)`; same value as [`dot`](Self::dot) but reads
    /// the polar form, so it avoids a cartesian sync on polar-fresh vectors.
    pub fn dot_polar(&self, other: &Vector2D) -> f64 {
        let a = self.sync_polar();
        let b = other.sync_polar();
        a.magnitude * b.magnitude * (a.radians - b.radians).cos()
    }

    /// z-component of the 3D cross product with both z-components at 0.
    pub fn cross(&self, other: &Vector2D) -> f64 {
        let a = self.sync_cartesian();
        let b = other.sync_cartesian();
        a.x * b.y - a.y * b.x
    }

    /// Sets the magnitude to 1 and keeps the direction. A zero vector
    /// becomes the unit vector along its stored direction.
    pub fn normalize(&mut self) {
        self.set_magnitude(1.0);
    }

    /// Consuming form of [`normalize`](Self::normalize).
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Rotates the direction by +90 degrees.
    pub fn perp(&mut self) {
        let direction = self.direction();
        self.set_direction(direction + 90.0);
    }

    /// Compares cartesian coordinates within `epsilon`.
    pub fn approx_eq(&self, other: &Vector2D, epsilon: f64) -> bool {
        (self.x() - other.x()).abs() <= epsilon && (self.y() - other.y()).abs() <= epsilon
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Point> for Vector2D {
    fn from(point: Point) -> Self {
        Self::cartesian(point.x, point.y)
    }
}

impl fmt::Debug for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let polar = self.sync_polar();
        let cartesian = self.sync_cartesian();
        f.debug_struct("Vector2D")
            .field("magnitude", &polar.magnitude)
            .field("direction", &polar.direction)
            .field("x", &cartesian.x)
            .field("y", &cartesian.y)
            .finish()
    }
}
