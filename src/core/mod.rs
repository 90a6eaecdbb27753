//! Core engine types: players, categories, configuration, RNG, events, errors.
//!
//! These are the building blocks shared by the question bank, the game
//! engine and the simulated session.

pub mod player;
pub mod category;
pub mod config;
pub mod rng;
pub mod event;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_SEATS};
pub use category::{Category, BOARD_SIZE, CATEGORY_BY_ROLL};
pub use config::{GameConfig, PlayerLimit, SessionConfig};
pub use rng::{GameRng, GameRngState};
pub use event::GameEvent;
pub use error::{GameError, Result};
