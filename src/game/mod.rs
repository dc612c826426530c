// Gameplay: the player character, the game mode and the session that runs them

pub mod characters;
pub mod mode;
pub mod session;

pub use mode::{GameMode, PawnClass};
pub use session::GameSession;

/// Gameplay setup errors
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid character stats: {field} = {value}")]
    InvalidStats { field: &'static str, value: f32 },

    #[error("Default pawn already spawned")]
    PawnAlreadySpawned,
}
