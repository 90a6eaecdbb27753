//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index in registration order. The first player to join is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-player storage that grows as players register. Backed by a `SmallVec`
//! sized for a full table, so a default game never touches the heap for seats.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Inline seat capacity. Matches the default table size.
pub const INLINE_SEATS: usize = 6;

/// Most seats a `PlayerMap` can hold; every seat needs a `u8` id.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Player identifier (0-based seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping to the first seat at `player_count`.
    ///
    /// ```
    /// use trivia::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        let next = self.index() + 1;
        if next >= player_count {
            Self(0)
        } else {
            Self(next as u8)
        }
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Starts empty; `push` registers the next seat and returns its `PlayerId`.
///
/// ## Example
///
/// ```
/// use trivia::core::{PlayerId, PlayerMap};
///
/// let mut purses: PlayerMap<u32> = PlayerMap::new();
/// let chet = purses.push(0).unwrap();
/// let pat = purses.push(0).unwrap();
///
/// purses[pat] += 1;
/// assert_eq!(purses[chet], 0);
/// assert_eq!(purses[pat], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: SmallVec<[T; INLINE_SEATS]>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: SmallVec::new(),
        }
    }

    /// Append an entry for the next seat.
    ///
    /// Returns `None` once all `MAX_SEATS` seats are taken.
    pub fn push(&mut self, value: T) -> Option<PlayerId> {
        if self.data.len() >= MAX_SEATS {
            return None;
        }
        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        Some(id)
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// True when no player has registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
