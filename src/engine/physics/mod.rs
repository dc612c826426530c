// Physics system using rapier2d

pub mod body;
mod collision;
mod query;
mod world;

pub use body::{presets, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionChannel;
pub use query::{SweepHit, WorldQuery};
pub use world::{PhysicsWorld, DEFAULT_GRAVITY};

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{QueryFilter, Real, Vector};
