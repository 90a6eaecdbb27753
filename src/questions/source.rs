//! Question source trait.
//!
//! The engine only needs to draw the next question for a category and to
//! know whether any category has run dry. Anything that can do that can
//! back a game.

use crate::core::Category;

/// A supply of questions, consumed oldest-first per category.
///
/// ## Implementation Notes
///
/// - `next_question`: Return `None` once a category is empty; never refill
/// - `remaining`: Must agree with what `next_question` will yield
pub trait QuestionSource {
    /// Take the next question for a category.
    fn next_question(&mut self, category: Category) -> Option<String>;

    /// Number of questions left in a category.
    fn remaining(&self, category: Category) -> usize;

    /// True iff every category still has at least one question.
    fn have_enough_questions(&self) -> bool {
        Category::ALL.iter().all(|&category| self.remaining(category) > 0)
    }
}
