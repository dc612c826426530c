// Scene queries the gameplay layer is allowed to make against the world

use glam::Vec2;

use super::body::RigidBodyHandle;
use super::collision::CollisionChannel;

/// Result of a blocking sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the sweep travelled before contact, in [0, 1]
    pub time: f32,
    /// Shape centre at the moment of contact
    pub location: Vec2,
    /// Contact normal on the hit surface
    pub normal: Vec2,
}

/// Synchronous collision queries against world geometry
///
/// Gameplay code receives this by reference every frame instead of reaching
/// into a global world. Implementations must complete in bounded time.
pub trait WorldQuery {
    /// Sweep a circle from `start` to `end` and report the first blocking hit
    /// on `channel`, skipping the colliders of `ignore`
    fn sweep_sphere(
        &self,
        start: Vec2,
        end: Vec2,
        radius: f32,
        channel: CollisionChannel,
        ignore: Option<RigidBodyHandle>,
    ) -> Option<SweepHit>;
}
