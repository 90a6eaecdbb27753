//! Question categories and the die-value lookup table.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of spaces on the board. Positions are `0..BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 12;

/// A question category.
///
/// Declaration order is significant: question banks are generated and
/// checked in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Pop,
    Sciences,
    Sports,
    Rock,
}

/// Category asked for each die value `0..12`.
///
/// Values `{0, 4, 8}` ask Pop, `{1, 5, 9}` Sciences, `{2, 6, 10}` Sports and
/// `{3, 7, 11}` Rock.
pub const CATEGORY_BY_ROLL: [Category; BOARD_SIZE as usize] = [
    Category::Pop,
    Category::Sciences,
    Category::Sports,
    Category::Rock,
    Category::Pop,
    Category::Sciences,
    Category::Sports,
    Category::Rock,
    Category::Pop,
    Category::Sciences,
    Category::Sports,
    Category::Rock,
];

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Pop,
        Category::Sciences,
        Category::Sports,
        Category::Rock,
    ];

    /// Resolve the category for a die value.
    ///
    /// ```
    /// use trivia::core::Category;
    ///
    /// assert_eq!(Category::for_roll(3).unwrap(), Category::Rock);
    /// assert!(Category::for_roll(12).is_err());
    /// ```
    pub fn for_roll(value: u8) -> Result<Self> {
        CATEGORY_BY_ROLL
            .get(value as usize)
            .copied()
            .ok_or(GameError::InvalidRoll(value))
    }

    /// Display name, also used as the prefix of generated questions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Sciences => "Sciences",
            Category::Sports => "Sports",
            Category::Rock => "Rock",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
