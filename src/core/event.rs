//! Game events.
//!
//! The engine never writes to the console. Every status change is recorded
//! as a `GameEvent` in an ordered journal, and callers decide how to render
//! it. `Display` produces the classic console line for each event.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::player::PlayerId;

/// A status record produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player joined. `number` is the roster size after joining.
    PlayerAdded {
        player: PlayerId,
        name: String,
        number: usize,
    },

    /// A turn began.
    TurnStarted { player: PlayerId, name: String },

    /// The current player rolled the die.
    Rolled { player: PlayerId, roll: u8 },

    /// An odd roll lets a penalized player move and answer.
    LeavingPenaltyBox { player: PlayerId, name: String },

    /// An even roll keeps a penalized player in place.
    StayingInPenaltyBox { player: PlayerId, name: String },

    /// The current player moved.
    Moved {
        player: PlayerId,
        name: String,
        place: u8,
    },

    /// The category for the next question was chosen.
    CategoryChosen { category: Category },

    /// A question was drawn from the bank.
    QuestionAsked { category: Category, question: String },

    /// A correct answer earned a coin.
    CoinAwarded {
        player: PlayerId,
        name: String,
        purse: u32,
    },

    /// A player reached the winning purse.
    Winner { player: PlayerId, name: String },

    /// A wrong answer sent the player to the penalty box.
    SentToPenaltyBox { player: PlayerId, name: String },

    /// A category ran dry.
    Draw,
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerAdded { player, .. }
            | GameEvent::TurnStarted { player, .. }
            | GameEvent::Rolled { player, .. }
            | GameEvent::LeavingPenaltyBox { player, .. }
            | GameEvent::StayingInPenaltyBox { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::CoinAwarded { player, .. }
            | GameEvent::Winner { player, .. }
            | GameEvent::SentToPenaltyBox { player, .. } => Some(*player),
            GameEvent::CategoryChosen { .. }
            | GameEvent::QuestionAsked { .. }
            | GameEvent::Draw => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerAdded { name, number, .. } => {
                write!(f, "{} was added\nThey are player number {}", name, number)
            }
            GameEvent::TurnStarted { name, .. } => write!(f, "{} is the current player.", name),
            GameEvent::Rolled { roll, .. } => write!(f, "They have rolled a {}", roll),
            GameEvent::LeavingPenaltyBox { name, .. } => {
                write!(f, "{} is getting out of the penalty box", name)
            }
            GameEvent::StayingInPenaltyBox { name, .. } => {
                write!(f, "{} is not getting out of the penalty box", name)
            }
            GameEvent::Moved { name, place, .. } => {
                write!(f, "{}'s new location is {}", name, place)
            }
            GameEvent::CategoryChosen { category } => write!(f, "The category is {}", category),
            GameEvent::QuestionAsked { question, .. } => f.write_str(question),
            GameEvent::CoinAwarded { name, purse, .. } => {
                write!(f, "{} now has {} Gold Coins.", name, purse)
            }
            GameEvent::Winner { .. } => f.write_str("winner!"),
            GameEvent::SentToPenaltyBox { name, .. } => write!(
                f,
                "Question was incorrectly answered {} was sent to the penalty box",
                name
            ),
            GameEvent::Draw => f.write_str("We don't have questions!!! Is Draw."),
        }
    }
}
