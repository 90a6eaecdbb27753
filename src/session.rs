//! Simulated game loop.
//!
//! A `Session` plays a `Game` to the end on its own: each turn it rolls a
//! die, answers wrong one time in `wrong_answer_odds`, and checks for a
//! winner or a draw. Dice and answers come from separate seeded streams, so
//! the same seed always replays the same game.
//!
//! ```
//! use trivia::core::SessionConfig;
//! use trivia::game::Outcome;
//! use trivia::session::Session;
//!
//! let players = ["Chet", "Pat", "Sue"];
//! let mut session = Session::with_players(players, SessionConfig::default()).unwrap();
//! let outcome = session.run_until_end().unwrap();
//! assert!(matches!(outcome, Outcome::Winner(_) | Outcome::Draw));
//! ```

use crate::core::{GameEvent, GameRng, Result, SessionConfig};
use crate::game::{Game, Outcome};
use crate::questions::{QuestionBank, QuestionSource};

/// A game plus the randomness that drives it.
pub struct Session<Q = QuestionBank> {
    game: Game<Q>,
    config: SessionConfig,
    dice: GameRng,
    answers: GameRng,
    turns: u64,
}

impl Session<QuestionBank> {
    /// Seat the given players at a fresh default game.
    pub fn with_players<I, S>(names: I, config: SessionConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut game = Game::new(QuestionBank::new());
        for name in names {
            game.add_player(name)?;
        }
        Ok(Self::new(game, config))
    }
}

impl<Q: QuestionSource> Session<Q> {
    /// Drive an existing game.
    pub fn new(game: Game<Q>, config: SessionConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            dice: rng.for_context("dice"),
            answers: rng.for_context("answers"),
            game,
            config,
            turns: 0,
        }
    }

    /// Play one turn: roll, answer, then check for an ending.
    ///
    /// Returns the outcome once the game is over.
    pub fn play_turn(&mut self) -> Result<Option<Outcome>> {
        let roll = self.dice.roll_die(self.config.die_sides);
        self.game.roll(roll)?;

        if self.answers.one_in(self.config.wrong_answer_odds) {
            self.game.wrong_answer()?;
        } else {
            self.game.was_correctly_answered()?;
        }

        self.turns += 1;
        Ok(self.game.conclude())
    }

    /// Play turns until someone wins, a category runs dry, or the turn cap hits.
    pub fn run_until_end(&mut self) -> Result<Outcome> {
        self.game.is_playable()?;

        // A game can already be over before its first roll (empty bank).
        if let Some(outcome) = self.game.conclude() {
            return Ok(outcome);
        }

        loop {
            if let Some(max) = self.config.max_turns {
                if self.turns >= max {
                    log::info!("no result after {} turns", self.turns);
                    return Ok(Outcome::Stalled { turns: self.turns });
                }
            }

            if let Some(outcome) = self.play_turn()? {
                log::info!("game over after {} turns: {:?}", self.turns, outcome);
                return Ok(outcome);
            }
        }
    }

    /// Turns played so far.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn game(&self) -> &Game<Q> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<Q> {
        &mut self.game
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game.drain_events()
    }

    /// Hand back the game.
    pub fn into_game(self) -> Game<Q> {
        self.game
    }
}
