pub mod body;

pub use body::{Body, BodyBuilder, BodyId, INFINITE_MASS};
