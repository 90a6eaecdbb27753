//! Game and session configuration.
//!
//! - `GameConfig`: table size, winning purse, player-limit policy
//! - `SessionConfig`: how the simulated driver rolls and answers
//!
//! Board size and the category table are fixed; see `core::category`.

use serde::{Deserialize, Serialize};

use super::player::MAX_SEATS;

/// How the roster capacity is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerLimit {
    /// Reject the registration that would take the roster past `max_players`.
    #[default]
    Strict,

    /// Reject only once the roster already holds more than `max_players`.
    ///
    /// Lets one extra player join. Kept for output compatibility with
    /// recorded games of the classic console version.
    Legacy,
}

impl PlayerLimit {
    /// Can another player join a roster of `current` players?
    #[must_use]
    pub fn admits(self, current: usize, max_players: usize) -> bool {
        match self {
            PlayerLimit::Strict => current < max_players,
            PlayerLimit::Legacy => current <= max_players,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Roster capacity (default: 6).
    pub max_players: usize,

    /// Exact purse value that wins the game (default: 6).
    pub points_to_win: u32,

    /// Capacity check policy.
    pub player_limit: PlayerLimit,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: 6,
            points_to_win: 6,
            player_limit: PlayerLimit::Strict,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roster capacity, at most `MAX_SEATS`.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max.min(MAX_SEATS);
        self
    }

    /// Set the winning purse.
    #[must_use]
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        self.points_to_win = points;
        self
    }

    /// Set the capacity check policy.
    #[must_use]
    pub fn with_player_limit(mut self, limit: PlayerLimit) -> Self {
        self.player_limit = limit;
        self
    }
}

/// Configuration for the simulated game loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for dice and answer draws. Same seed, same game.
    pub seed: u64,

    /// Faces on the die; rolls are uniform in `1..=die_sides` (default: 6).
    pub die_sides: u8,

    /// One in `wrong_answer_odds` answers is wrong (default: 9).
    pub wrong_answer_odds: u32,

    /// Give up after this many turns. `None` plays until win or draw.
    pub max_turns: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            die_sides: 6,
            wrong_answer_odds: 9,
            max_turns: None,
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom die.
    ///
    /// Faces past the board size would produce invalid rolls, so the die is
    /// capped at 11 faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        self.die_sides = sides.clamp(1, 11);
        self
    }

    /// Create a new config with custom wrong-answer odds.
    #[must_use]
    pub fn with_wrong_answer_odds(mut self, odds: u32) -> Self {
        self.wrong_answer_odds = odds.max(1);
        self
    }

    /// Create a new config with a turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u64) -> Self {
        self.max_turns = Some(turns);
        self
    }
}
