//! # trivia
//!
//! A turn-based board trivia game engine.
//!
//! ## Rules
//!
//! 1. **Board**: 12 spaces in a ring. A roll moves the current player
//!    forward, wrapping past the last space.
//!
//! 2. **Questions**: The die value picks one of four categories (Pop,
//!    Sciences, Sports, Rock). Questions are asked oldest-first and never
//!    replenished.
//!
//! 3. **Scoring**: A correct answer earns a gold coin. A wrong answer sends
//!    the player to the penalty box; they stay put on even rolls and earn
//!    nothing until they roll odd and answer correctly.
//!
//! 4. **Ending**: A purse of exactly 6 wins. A category running dry is a draw.
//!
//! ## Architecture
//!
//! - **No console output in the engine**: `Game` records `GameEvent`s; the
//!   caller decides how to show them. Diagnostics go through `log`.
//!
//! - **Pluggable questions**: `Game` draws from any `QuestionSource`.
//!
//! - **Deterministic simulation**: `Session` drives a game from a seeded
//!   RNG, so a seed replays the same game.
//!
//! ## Modules
//!
//! - `core`: Players, categories, configuration, RNG, events, errors
//! - `questions`: Question source trait and the generated question bank
//! - `game`: The rules engine
//! - `session`: Simulated game loop

pub mod core;
pub mod questions;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Category, GameConfig, GameError, GameEvent, GameRng, PlayerId, PlayerLimit, PlayerMap, Result,
    SessionConfig,
};

pub use crate::questions::{QuestionBank, QuestionBankBuilder, QuestionSource};

pub use crate::game::{Game, Outcome, RollOutcome, Seat};

pub use crate::session::Session;
