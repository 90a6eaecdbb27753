//! Question supply for the game.
//!
//! - `QuestionSource`: what the engine draws questions from
//! - `QuestionBank`: generated, in-memory FIFO lists per category

pub mod source;
pub mod bank;

pub use source::QuestionSource;
pub use bank::{
    default_question, rock_question, QuestionBank, QuestionBankBuilder, QuestionGenerator,
    DEFAULT_QUESTION_LIMIT,
};
