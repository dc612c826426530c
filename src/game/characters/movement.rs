// Minimal character movement: turns input and jump requests into a velocity
//
// Collision and gravity integration stay with the physics world; this only
// decides the velocity handed to the body each tick and mirrors the body's
// state back afterwards.

use glam::Vec2;

use super::stats::CharacterStats;
use crate::core::math::approach;

/// Below this ground speed braking stops the character outright
const BRAKE_TO_STOP_SPEED: f32 = 10.0;

/// Residual speeds under this are treated as standing still
const MIN_SPEED: f32 = 1e-3;

/// Movement state for one character
#[derive(Debug, Default)]
pub struct CharacterMovement {
    location: Vec2,
    velocity: Vec2,
    on_ground: bool,

    /// Horizontal input accumulated since the last update
    pending_input: f32,

    /// Jump requested since the last update; consumed by it
    jump_pressed: bool,
    /// Jumps used since last landing
    jump_count: u8,
    /// A jump started in the last update and has not been synced yet
    just_jumped: bool,
}

impl CharacterMovement {
    pub fn new(location: Vec2) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Add horizontal input for this tick; clamped to [-1, 1] when consumed
    pub fn add_input(&mut self, value: f32) {
        self.pending_input += value;
    }

    /// Request a jump for the next update
    ///
    /// The request is consumed by that update whether or not a jump fires, so
    /// each press gives at most one jump.
    pub fn jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn stop_jumping(&mut self) {
        self.jump_pressed = false;
    }

    pub fn is_jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn just_jumped(&self) -> bool {
        self.just_jumped
    }

    pub fn is_moving_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn location(&self) -> Vec2 {
        self.location
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn can_jump(&self, stats: &CharacterStats) -> bool {
        if self.jump_count >= stats.max_jump_count {
            return false;
        }
        // Extra jumps are only available once a jump has started
        self.on_ground || self.jump_count > 0
    }

    /// Compute this tick's velocity from input and jump state
    ///
    /// Returns the velocity to hand to the physics body.
    pub fn update(&mut self, stats: &CharacterStats, dt: f32) -> Vec2 {
        let input = self.pending_input.clamp(-1.0, 1.0);
        self.pending_input = 0.0;
        self.just_jumped = false;

        let target = input * stats.max_walk_speed;
        let mut velocity = self.velocity;

        if self.on_ground {
            if input != 0.0 {
                velocity.x = approach(velocity.x, target, stats.max_acceleration * dt);
            } else {
                let braking =
                    stats.braking_deceleration + stats.ground_friction * velocity.x.abs();
                velocity.x = approach(velocity.x, 0.0, braking * dt);
                if velocity.x.abs() < BRAKE_TO_STOP_SPEED {
                    velocity.x = 0.0;
                }
            }
        } else if input != 0.0 {
            velocity.x = approach(
                velocity.x,
                target,
                stats.max_acceleration * stats.air_control * dt,
            );
        }

        let jump_requested = std::mem::take(&mut self.jump_pressed);
        if jump_requested && self.can_jump(stats) {
            log::debug!("Jump {} at {:?}", self.jump_count + 1, self.location);
            velocity.y = stats.jump_velocity;
            self.jump_count += 1;
            self.on_ground = false;
            self.just_jumped = true;
        }

        self.velocity = velocity;
        velocity
    }

    /// Mirror the physics body back after a step
    ///
    /// On the ground the vertical velocity is zero; contact jitter is dropped.
    pub fn sync(&mut self, location: Vec2, velocity: Vec2, on_ground: bool) {
        if on_ground && !self.on_ground {
            self.jump_count = 0;
        }

        let mut velocity = velocity;
        if on_ground {
            velocity.y = 0.0;
        }
        if velocity.x.abs() < MIN_SPEED {
            velocity.x = 0.0;
        }

        self.location = location;
        self.velocity = velocity;
        self.on_ground = on_ground;
        self.just_jumped = false;
    }
}
