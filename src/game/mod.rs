//! The trivia game engine.
//!
//! `Game` implements the rules:
//! - Players register, up to the configured table size
//! - A roll moves the current player around a 12-space board and asks a
//!   question from the category the die value selects
//! - Correct answers earn a coin; wrong answers send the player to the
//!   penalty box, which only an odd roll and a correct answer get them out of
//! - The first exact purse of `points_to_win` wins; an empty category is a draw

mod engine;
mod outcome;

pub use engine::{Game, Seat};
pub use outcome::{Outcome, RollOutcome};
