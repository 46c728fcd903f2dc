pub mod interval;
pub mod point;
pub mod transform;
pub mod vector2d;

pub use interval::Interval;
pub use point::Point;
pub use transform::Transform;
pub use vector2d::Vector2D;
