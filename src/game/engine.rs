//! The trivia game engine.
//!
//! Owns the roster, board positions, purses and penalty flags, and draws
//! questions from a `QuestionSource`. The engine records what happens as
//! `GameEvent`s and leaves turn order discipline (roll, then answer, then
//! check for an ending) to the caller.

use serde::{Deserialize, Serialize};

use super::outcome::{Outcome, RollOutcome};
use crate::core::{
    Category, GameConfig, GameError, GameEvent, PlayerId, PlayerMap, Result, BOARD_SIZE, MAX_SEATS,
};
use crate::questions::{QuestionBank, QuestionSource};

/// Everything the table knows about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    /// Board position, `0..BOARD_SIZE`.
    pub place: u8,
    /// Gold coins earned.
    pub purse: u32,
    pub in_penalty_box: bool,
}

impl Seat {
    fn new(name: String) -> Self {
        Self {
            name,
            place: 0,
            purse: 0,
            in_penalty_box: false,
        }
    }
}

/// A game of trivia.
///
/// ## Example
///
/// ```
/// use trivia::core::Category;
/// use trivia::game::Game;
/// use trivia::questions::QuestionBank;
///
/// let mut game = Game::new(QuestionBank::new());
/// game.add_player("Chet").unwrap();
/// game.add_player("Pat").unwrap();
///
/// let rolled = game.roll(3).unwrap();
/// assert_eq!(rolled.question(), Some("Rock Question 0"));
/// assert_eq!(game.current_category(), Some(Category::Rock));
///
/// game.was_correctly_answered().unwrap();
/// assert_eq!(game.purse(trivia::core::PlayerId::new(0)), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Game<Q = QuestionBank> {
    config: GameConfig,
    questions: Q,
    seats: PlayerMap<Seat>,
    current_player: PlayerId,
    current_category: Option<Category>,
    winner: Option<PlayerId>,
    /// Set when the current player rolled odd out of the penalty box this turn.
    leaving_penalty_box: bool,
    events: Vec<GameEvent>,
    draw_recorded: bool,
}

impl<Q: QuestionSource> Game<Q> {
    /// Create a game with the default configuration.
    pub fn new(questions: Q) -> Self {
        Self::with_config(questions, GameConfig::default())
    }

    /// Create a game with a custom configuration.
    pub fn with_config(questions: Q, config: GameConfig) -> Self {
        Self {
            config,
            questions,
            seats: PlayerMap::new(),
            current_player: PlayerId::new(0),
            current_category: None,
            winner: None,
            leaving_penalty_box: false,
            events: Vec::new(),
            draw_recorded: false,
        }
    }

    // === Roster ===

    /// Register a player. Fails once the table is full.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        let max = self.config.max_players;
        if !self.config.player_limit.admits(self.how_many_players(), max) {
            return Err(GameError::PlayerLimitExceeded { max });
        }

        let name = name.into();
        let player = self
            .seats
            .push(Seat::new(name.clone()))
            .ok_or(GameError::PlayerLimitExceeded { max: max.min(MAX_SEATS) })?;
        let number = self.how_many_players();
        self.record(GameEvent::PlayerAdded {
            player,
            name,
            number,
        });

        Ok(player)
    }

    #[must_use]
    pub fn how_many_players(&self) -> usize {
        self.seats.player_count()
    }

    /// Player names in seat order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.seats.values().map(|seat| seat.name.as_str())
    }

    /// Fails with `NotEnoughPlayers` below two players.
    pub fn is_playable(&self) -> Result<()> {
        let count = self.how_many_players();
        if count < 2 {
            return Err(GameError::NotEnoughPlayers { count });
        }
        Ok(())
    }

    // === Turn ===

    /// Play the current player's roll.
    ///
    /// A penalized player only moves on an odd roll; moving always asks a
    /// question. The roll is validated before any state changes.
    pub fn roll(&mut self, value: u8) -> Result<RollOutcome> {
        self.is_playable()?;
        let category = Category::for_roll(value)?;

        let player = self.current_player;
        let seat = self.current_seat()?;
        let name = seat.name.clone();
        let in_penalty_box = seat.in_penalty_box;

        let moves = !in_penalty_box || value % 2 != 0;
        if moves && self.questions.remaining(category) == 0 {
            log::warn!("{} has run out of questions", category);
            return Err(GameError::QuestionExhausted(category));
        }

        self.record(GameEvent::TurnStarted {
            player,
            name: name.clone(),
        });
        self.record(GameEvent::Rolled {
            player,
            roll: value,
        });

        if in_penalty_box {
            if !moves {
                self.record(GameEvent::StayingInPenaltyBox { player, name });
                return Ok(RollOutcome::Stayed);
            }
            self.leaving_penalty_box = true;
            self.record(GameEvent::LeavingPenaltyBox { player, name });
        }

        self.player_move(value)
    }

    /// Advance the current player by `value` spaces and ask a question.
    ///
    /// The category comes from the die value, not the landing space.
    pub fn player_move(&mut self, value: u8) -> Result<RollOutcome> {
        Category::for_roll(value)?;
        let player = self.current_player;

        let seat = self.current_seat_mut()?;
        let mut place = seat.place % BOARD_SIZE + value;
        if place >= BOARD_SIZE {
            place -= BOARD_SIZE;
        }
        seat.place = place;
        let name = seat.name.clone();

        self.record(GameEvent::Moved {
            player,
            name,
            place,
        });

        let question = self.get_category_question(value)?;
        let category = self.current_category.ok_or(GameError::NoCategorySelected)?;

        Ok(RollOutcome::Moved {
            place,
            category,
            question,
        })
    }

    /// Select the category for a die value and ask its next question.
    pub fn get_category_question(&mut self, roll: u8) -> Result<String> {
        let category = Category::for_roll(roll)?;
        self.current_category = Some(category);
        self.record(GameEvent::CategoryChosen { category });
        self.ask_question()
    }

    /// Draw the oldest question of the current category.
    pub fn ask_question(&mut self) -> Result<String> {
        let category = self.current_category.ok_or(GameError::NoCategorySelected)?;

        match self.questions.next_question(category) {
            Some(question) => {
                self.record(GameEvent::QuestionAsked {
                    category,
                    question: question.clone(),
                });
                Ok(question)
            }
            None => {
                log::warn!("{} has run out of questions", category);
                Err(GameError::QuestionExhausted(category))
            }
        }
    }

    // === Answers ===

    /// Resolve a correct answer.
    ///
    /// A penalized player never scores. They leave the box only if they
    /// rolled odd this turn; otherwise the turn just passes.
    pub fn was_correctly_answered(&mut self) -> Result<()> {
        let leaving = self.leaving_penalty_box;
        let seat = self.current_seat_mut()?;
        if seat.in_penalty_box {
            if leaving {
                seat.in_penalty_box = false;
                log::trace!("{} cleared their penalty", seat.name);
            }
            self.go_to_next_player();
            return Ok(());
        }

        self.add_coin_to_player()
    }

    /// Award the current player a coin, check for a winner, pass the turn.
    pub fn add_coin_to_player(&mut self) -> Result<()> {
        let player = self.current_player;
        let seat = self.current_seat_mut()?;
        seat.purse += 1;
        let purse = seat.purse;
        let name = seat.name.clone();

        self.record(GameEvent::CoinAwarded {
            player,
            name,
            purse,
        });
        self.did_player_win();
        self.go_to_next_player();

        Ok(())
    }

    /// Resolve a wrong answer: into the penalty box, pass the turn.
    pub fn wrong_answer(&mut self) -> Result<()> {
        let player = self.current_player;
        let seat = self.current_seat_mut()?;
        seat.in_penalty_box = true;
        let name = seat.name.clone();

        self.record(GameEvent::SentToPenaltyBox { player, name });
        self.go_to_next_player();

        Ok(())
    }

    /// Pass the turn round-robin.
    pub fn go_to_next_player(&mut self) {
        self.current_player = self.current_player.next(self.how_many_players());
        self.leaving_penalty_box = false;
        log::trace!("turn passes to {}", self.current_player);
    }

    // === Ending ===

    /// Check whether any purse equals `points_to_win` exactly.
    ///
    /// Sets the winner flag when it does. The first seat holding the winning
    /// purse is the winner.
    pub fn did_player_win(&mut self) -> bool {
        let points = self.config.points_to_win;
        let found = self
            .seats
            .iter()
            .find(|(_, seat)| seat.purse == points)
            .map(|(player, seat)| (player, seat.name.clone()));

        match found {
            Some((player, name)) => {
                if self.winner.is_none() {
                    self.winner = Some(player);
                }
                self.record(GameEvent::Winner { player, name });
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn have_winner(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True while any category is out of questions.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !self.questions.have_enough_questions()
    }

    /// The result, if the game is over. A winner takes precedence over a draw.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(player) = self.winner {
            return Some(Outcome::Winner(player));
        }
        if self.is_draw() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Like `outcome`, but records the draw message the first time a draw is seen.
    pub fn conclude(&mut self) -> Option<Outcome> {
        let outcome = self.outcome();
        if outcome == Some(Outcome::Draw) && !self.draw_recorded {
            self.draw_recorded = true;
            self.record(GameEvent::Draw);
        }
        outcome
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Hand the turn to a specific seat.
    pub fn set_current_player(&mut self, player: PlayerId) -> Result<()> {
        if player.index() >= self.how_many_players() {
            return Err(GameError::UnknownPlayer(player));
        }
        self.current_player = player;
        self.leaving_penalty_box = false;
        Ok(())
    }

    #[must_use]
    pub fn current_category(&self) -> Option<Category> {
        self.current_category
    }

    /// Force the category used by the next `ask_question`.
    pub fn set_current_category(&mut self, category: Category) {
        self.current_category = Some(category);
    }

    /// Every seat in registration order.
    pub fn seats(&self) -> impl Iterator<Item = (PlayerId, &Seat)> {
        self.seats.iter()
    }

    /// A player's seat, if registered.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.get(player)
    }

    pub fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Seat> {
        self.seats.get_mut(player).ok_or(GameError::UnknownPlayer(player))
    }

    #[must_use]
    pub fn place(&self, player: PlayerId) -> Option<u8> {
        self.seat(player).map(|seat| seat.place)
    }

    #[must_use]
    pub fn purse(&self, player: PlayerId) -> Option<u32> {
        self.seat(player).map(|seat| seat.purse)
    }

    #[must_use]
    pub fn in_penalty_box(&self, player: PlayerId) -> Option<bool> {
        self.seat(player).map(|seat| seat.in_penalty_box)
    }

    #[must_use]
    pub fn questions(&self) -> &Q {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut Q {
        &mut self.questions
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the journal empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: GameEvent) {
        match event.player() {
            Some(player) => log::debug!("[{}] {}", player, event),
            None => log::debug!("{}", event),
        }
        self.events.push(event);
    }

    fn current_seat(&self) -> Result<&Seat> {
        let player = self.current_player;
        self.seats.get(player).ok_or(GameError::UnknownPlayer(player))
    }

    fn current_seat_mut(&mut self) -> Result<&mut Seat> {
        let player = self.current_player;
        self.seats.get_mut(player).ok_or(GameError::UnknownPlayer(player))
    }
}
