//! In-memory question bank.
//!
//! Questions are generated once, at construction, and consumed front to
//! back during play. Nothing is ever replenished.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::source::QuestionSource;
use crate::core::Category;

/// Default number of questions generated per category.
pub const DEFAULT_QUESTION_LIMIT: usize = 50;

/// Produces the text of the question at a zero-based index.
pub type QuestionGenerator = Box<dyn Fn(Category, usize) -> String>;

/// Default question text: `"<Category> Question <i>"`.
#[must_use]
pub fn default_question(category: Category, index: usize) -> String {
    format!("{} Question {}", category, index)
}

/// Rock has its own generator so it can be swapped independently.
#[must_use]
pub fn rock_question(index: usize) -> String {
    format!("Rock Question {}", index)
}

/// Ordered question lists, one per category.
///
/// ## Example
///
/// ```
/// use trivia::core::Category;
/// use trivia::questions::{QuestionBank, QuestionSource};
///
/// let mut bank = QuestionBank::new();
/// assert_eq!(bank.remaining(Category::Pop), 50);
/// assert_eq!(bank.next_question(Category::Pop).as_deref(), Some("Pop Question 0"));
/// assert_eq!(bank.remaining(Category::Pop), 49);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    question_limit: usize,
    questions: FxHashMap<Category, VecDeque<String>>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionBank {
    /// Create a bank with the default limit and generators.
    #[must_use]
    pub fn new() -> Self {
        QuestionBankBuilder::new().build()
    }

    /// Start configuring a bank.
    #[must_use]
    pub fn builder() -> QuestionBankBuilder {
        QuestionBankBuilder::new()
    }

    /// Questions generated per category at construction.
    #[must_use]
    pub fn question_limit(&self) -> usize {
        self.question_limit
    }

    /// The questions still waiting in a category, oldest first.
    pub fn questions(&self, category: Category) -> impl Iterator<Item = &str> {
        self.questions
            .get(&category)
            .into_iter()
            .flat_map(|deck| deck.iter().map(String::as_str))
    }

    /// Replace a category's questions. The first item will be asked first.
    pub fn replace<I, S>(&mut self, category: Category, questions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let deck = questions.into_iter().map(Into::into).collect();
        self.questions.insert(category, deck);
    }
}

impl QuestionSource for QuestionBank {
    fn next_question(&mut self, category: Category) -> Option<String> {
        self.questions.get_mut(&category)?.pop_front()
    }

    fn remaining(&self, category: Category) -> usize {
        self.questions.get(&category).map_or(0, VecDeque::len)
    }
}

/// Builder for a `QuestionBank`.
pub struct QuestionBankBuilder {
    question_limit: usize,
    generators: FxHashMap<Category, QuestionGenerator>,
}

impl Default for QuestionBankBuilder {
    fn default() -> Self {
        let mut generators: FxHashMap<Category, QuestionGenerator> = FxHashMap::default();
        generators.insert(Category::Rock, Box::new(|_, index| rock_question(index)));

        Self {
            question_limit: DEFAULT_QUESTION_LIMIT,
            generators,
        }
    }
}

impl QuestionBankBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Questions to generate per category.
    pub fn question_limit(mut self, limit: usize) -> Self {
        self.question_limit = limit;
        self
    }

    /// Use a custom generator for one category.
    pub fn generator(
        mut self,
        category: Category,
        generate: impl Fn(usize) -> String + 'static,
    ) -> Self {
        self.generators
            .insert(category, Box::new(move |_, index| generate(index)));
        self
    }

    /// Generate every category's questions, in declaration order.
    pub fn build(self) -> QuestionBank {
        let mut questions = FxHashMap::default();

        for category in Category::ALL {
            let deck: VecDeque<String> = (0..self.question_limit)
                .map(|index| match self.generators.get(&category) {
                    Some(generate) => generate(category, index),
                    None => default_question(category, index),
                })
                .collect();
            questions.insert(category, deck);
        }

        log::trace!(
            "generated {} questions in each of {} categories",
            self.question_limit,
            Category::ALL.len()
        );

        QuestionBank {
            question_limit: self.question_limit,
            questions,
        }
    }
}
