// Character system
//
// This module contains everything related to the playable character:
// - Character controller (input, facing, animation choice, ledge probe)
// - Minimal movement component feeding the physics body
// - Ledge-search state machine
// - Flipbook sprites, weapon attachment and the side-view camera

pub mod animation;
pub mod camera;
pub mod character;
pub mod movement;
pub mod state;
pub mod stats;
pub mod weapon;

// Re-export commonly used types
pub use animation::{Flipbook, FlipbookComponent};
pub use camera::{CameraRig, SideViewCamera};
pub use character::{Character, CharacterAssets, CharacterId, Controller, Facing};
pub use movement::CharacterMovement;
pub use state::{LedgeSearch, LedgeTransition, MovementMode};
pub use stats::{CharacterStats, BASE_STATS};
pub use weapon::{Weapon, WeaponClass, WEAPON_SOCKET};
