// Game mode: decides which pawn the player gets

use glam::Vec2;
use std::fmt;

use super::characters::{Character, CharacterId};
use crate::engine::physics::PhysicsWorld;

/// Constructor signature shared by every pawn class
pub type PawnFactory = fn(CharacterId, &mut PhysicsWorld, Vec2) -> Character;

/// A spawnable pawn type
#[derive(Clone, Copy)]
pub struct PawnClass {
    name: &'static str,
    factory: PawnFactory,
}

impl PawnClass {
    pub const fn new(name: &'static str, factory: PawnFactory) -> Self {
        Self { name, factory }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instantiate the pawn into the physics world
    pub fn spawn(&self, id: CharacterId, physics: &mut PhysicsWorld, location: Vec2) -> Character {
        (self.factory)(id, physics, location)
    }
}

impl fmt::Debug for PawnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PawnClass").field("name", &self.name).finish()
    }
}

impl PartialEq for PawnClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Session-wide rules; read once when play begins
#[derive(Debug, Clone)]
pub struct GameMode {
    default_pawn_class: PawnClass,
}

impl GameMode {
    /// The side-scroller character is the default pawn
    pub fn new() -> Self {
        Self {
            default_pawn_class: Character::static_class(),
        }
    }

    /// Use a different default pawn
    pub fn with_default_pawn_class(default_pawn_class: PawnClass) -> Self {
        Self { default_pawn_class }
    }

    pub fn default_pawn_class(&self) -> PawnClass {
        self.default_pawn_class
    }

    /// Spawn the default pawn for a player
    pub fn spawn_default_pawn(
        &self,
        id: CharacterId,
        physics: &mut PhysicsWorld,
        location: Vec2,
    ) -> Character {
        log::info!(
            "Spawning default pawn {} at {:?}",
            self.default_pawn_class.name(),
            location
        );
        self.default_pawn_class.spawn(id, physics, location)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::{CharacterAssets, BASE_STATS};

    #[test]
    fn test_default_pawn_is_side_scroller_character() {
        let mode = GameMode::new();
        assert_eq!(mode.default_pawn_class(), Character::static_class());
        assert_eq!(mode.default_pawn_class().name(), "SideScrollerCharacter");
    }

    #[test]
    fn test_spawn_default_pawn_adds_body() {
        let mode = GameMode::default();
        let mut physics = PhysicsWorld::new();
        let pawn = mode.spawn_default_pawn(7, &mut physics, Vec2::new(0.0, 200.0));

        assert_eq!(pawn.id, 7);
        assert_eq!(pawn.location(), Vec2::new(0.0, 200.0));
        assert!(pawn.body_handle().is_some());
        assert_eq!(physics.body_count(), 1);
    }

    #[test]
    fn test_custom_default_pawn() {
        let unarmed = PawnClass::new("Unarmed", |id, _physics, location| {
            Character::new(id, BASE_STATS, CharacterAssets::default(), location)
        });
        let mode = GameMode::with_default_pawn_class(unarmed);
        let mut physics = PhysicsWorld::new();
        let pawn = mode.spawn_default_pawn(0, &mut physics, Vec2::ZERO);

        assert_eq!(mode.default_pawn_class().name(), "Unarmed");
        assert!(pawn.body_handle().is_none());
        assert_eq!(physics.body_count(), 0);
    }
}
