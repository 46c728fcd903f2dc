pub mod frame_pairs;
pub mod physics_world;
pub mod timestep;

pub use frame_pairs::FramePairs;
pub use physics_world::World;
pub use timestep::FixedTimestep;
