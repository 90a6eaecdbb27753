//! Error types for the game engine.

use super::category::Category;
use super::player::PlayerId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Everything the engine can refuse to do.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Max player limit has been reached! (max {max})")]
    PlayerLimitExceeded { max: usize },

    #[error("Not enough players: {count} registered, at least 2 required")]
    NotEnoughPlayers { count: usize },

    #[error("Invalid roll: {0} has no category")]
    InvalidRoll(u8),

    #[error("No questions left in category {0}")]
    QuestionExhausted(Category),

    #[error("No category has been selected")]
    NoCategorySelected,

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}
