//! Terminal results and per-roll results.

use serde::{Deserialize, Serialize};

use crate::core::{Category, PlayerId};

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player's purse hit the winning value.
    Winner(PlayerId),
    /// A category ran out of questions.
    Draw,
    /// The session gave up after a turn cap without a result.
    Stalled { turns: u64 },
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

/// What a roll did to the current player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Penalized player rolled even: no move, no question.
    Stayed,
    /// Player moved and was asked a question.
    Moved {
        place: u8,
        category: Category,
        question: String,
    },
}

impl RollOutcome {
    /// The question asked, if the player moved.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        match self {
            RollOutcome::Stayed => None,
            RollOutcome::Moved { question, .. } => Some(question),
        }
    }
}
