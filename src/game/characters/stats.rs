// Character tuning - world units are centimetres, y is up

use crate::game::GameError;

/// Movement, collision and probe tuning for a side-scrolling character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Collision capsule
    /// Half of the capsule's total height
    pub capsule_half_height: f32,
    /// Capsule radius
    pub capsule_radius: f32,

    // Movement
    /// Gravity multiplier applied to the world gravity
    pub gravity_scale: f32,
    /// Share of ground steering available in the air (0.0 - 1.0)
    pub air_control: f32,
    /// Upward velocity set when a jump starts
    pub jump_velocity: f32,
    /// Number of jumps before landing is required
    pub max_jump_count: u8,
    /// Extra deceleration proportional to speed when braking on ground
    pub ground_friction: f32,
    /// Constant deceleration when braking on ground
    pub braking_deceleration: f32,
    /// Top horizontal speed on ground
    pub max_walk_speed: f32,
    /// Acceleration towards the input direction
    pub max_acceleration: f32,

    // Ledge probe
    /// Radius of the swept sphere
    pub probe_radius: f32,
    /// Distance swept along the facing direction
    pub probe_distance: f32,
}

/// Side-scroller defaults
pub const BASE_STATS: CharacterStats = CharacterStats {
    capsule_half_height: 96.0,
    capsule_radius: 40.0,

    gravity_scale: 2.0,
    air_control: 0.8,
    jump_velocity: 1000.0,
    max_jump_count: 1,
    ground_friction: 3.0,
    braking_deceleration: 2048.0,
    max_walk_speed: 600.0,
    max_acceleration: 2048.0,

    probe_radius: 25.0,
    probe_distance: 100.0,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Reject tuning the movement code cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("capsule_half_height", self.capsule_half_height),
            ("capsule_radius", self.capsule_radius),
            ("max_walk_speed", self.max_walk_speed),
            ("max_acceleration", self.max_acceleration),
            ("probe_radius", self.probe_radius),
            ("probe_distance", self.probe_distance),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(GameError::InvalidStats { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.air_control) {
            return Err(GameError::InvalidStats {
                field: "air_control",
                value: self.air_control,
            });
        }

        if self.capsule_radius > self.capsule_half_height {
            return Err(GameError::InvalidStats {
                field: "capsule_radius",
                value: self.capsule_radius,
            });
        }

        Ok(())
    }
}
