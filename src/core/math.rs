// Math utilities and helper functions

use glam::Vec2;

/// Move `current` towards `target` by at most `max_delta`
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.max(0.0);
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + max_delta * (target - current).signum()
    }
}

/// Unit forward vector for a yaw in degrees, projected onto the play plane
///
/// Yaw 0 looks down +X (screen right), yaw 180 looks down -X.
pub fn yaw_to_forward(yaw_degrees: f32) -> Vec2 {
    let radians = yaw_degrees.to_radians();
    Vec2::new(radians.cos(), 0.0).normalize_or_zero()
}

/// Wrap an angle in degrees into [0, 360)
pub fn normalize_yaw(yaw_degrees: f32) -> f32 {
    yaw_degrees.rem_euclid(360.0)
}
