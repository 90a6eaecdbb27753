//! Game engine integration tests.
//!
//! These tests drive `Game` through its public API the way a caller would:
//! register, roll, answer, and check for an ending.

use trivia::core::{Category, GameConfig, GameError, GameEvent, PlayerId, PlayerLimit};
use trivia::game::{Game, Outcome, RollOutcome};
use trivia::questions::{QuestionBank, QuestionSource};

const CHET: PlayerId = PlayerId::new(0);
const PAT: PlayerId = PlayerId::new(1);
const SUE: PlayerId = PlayerId::new(2);

fn three_player_game() -> Game {
    let mut game = Game::new(QuestionBank::new());
    for name in ["Chet", "Pat", "Sue"] {
        game.add_player(name).unwrap();
    }
    game
}

fn lines(events: &[GameEvent]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Registration
// =============================================================================

/// Registration messages number players from 1.
#[test]
fn test_registration_messages() {
    let game = three_player_game();

    assert_eq!(
        lines(game.events()),
        vec![
            "Chet was added\nThey are player number 1",
            "Pat was added\nThey are player number 2",
            "Sue was added\nThey are player number 3",
        ]
    );
}

/// Adding many more players than the table holds fails under either policy.
#[test]
fn test_eleven_players_rejected() {
    for limit in [PlayerLimit::Strict, PlayerLimit::Legacy] {
        let config = GameConfig::new().with_player_limit(limit);
        let mut game = Game::with_config(QuestionBank::new(), config);
        let result: Result<Vec<_>, _> = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
            .into_iter()
            .map(|name| game.add_player(name))
            .collect();

        assert!(matches!(result, Err(GameError::PlayerLimitExceeded { max: 6 })));
    }
}

/// A smaller table enforces its own capacity.
#[test]
fn test_custom_table_size() {
    let mut game = Game::with_config(QuestionBank::new(), GameConfig::new().with_max_players(2));
    game.add_player("Chet").unwrap();
    game.add_player("Pat").unwrap();

    assert_eq!(game.add_player("Sue"), Err(GameError::PlayerLimitExceeded { max: 2 }));
}

// =============================================================================
// Turns
// =============================================================================

/// Fresh game, first roll of 3: Rock, first Rock question.
#[test]
fn test_first_roll_of_three() {
    let mut game = three_player_game();
    game.drain_events();

    let rolled = game.roll(3).unwrap();

    assert_eq!(
        rolled,
        RollOutcome::Moved {
            place: 3,
            category: Category::Rock,
            question: "Rock Question 0".to_string(),
        }
    );
    assert_eq!(game.current_category(), Some(Category::Rock));
    assert_eq!(
        lines(game.events()),
        vec![
            "Chet is the current player.",
            "They have rolled a 3",
            "Chet's new location is 3",
            "The category is Rock",
            "Rock Question 0",
        ]
    );
}

/// A full round: every player rolls and answers in seat order.
#[test]
fn test_round_robin() {
    let mut game = three_player_game();

    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(2).unwrap();
    game.wrong_answer().unwrap();
    game.roll(4).unwrap();
    game.was_correctly_answered().unwrap();

    assert_eq!(game.current_player(), CHET);
    assert_eq!(game.purse(CHET), Some(1));
    assert_eq!(game.purse(PAT), Some(0));
    assert_eq!(game.in_penalty_box(PAT), Some(true));
    assert_eq!(game.purse(SUE), Some(1));
    assert_eq!(game.place(SUE), Some(4));
}

/// Penalty box lifecycle: sent in, held on even, escapes on odd + correct.
#[test]
fn test_penalty_box_lifecycle() {
    let mut game = three_player_game();

    // Chet answers wrong
    game.roll(2).unwrap();
    game.wrong_answer().unwrap();
    // Pat and Sue play normally
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();

    // Chet rolls even: held, no question
    game.drain_events();
    assert_eq!(game.roll(6).unwrap(), RollOutcome::Stayed);
    assert_eq!(game.place(CHET), Some(2));
    assert_eq!(
        game.events().last().map(ToString::to_string).as_deref(),
        Some("Chet is not getting out of the penalty box")
    );
    game.wrong_answer().unwrap();

    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();

    // Chet rolls odd and answers correctly: out, but no coin
    game.drain_events();
    let rolled = game.roll(3).unwrap();
    assert_eq!(rolled.question(), Some("Rock Question 0"));
    assert!(lines(game.events()).contains(&"Chet is getting out of the penalty box".to_string()));
    game.was_correctly_answered().unwrap();

    assert_eq!(game.in_penalty_box(CHET), Some(false));
    assert_eq!(game.purse(CHET), Some(0));
    assert_eq!(game.place(CHET), Some(5));

    // Next correct answer scores again
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    assert_eq!(game.purse(CHET), Some(1));
}

/// A correct answer after an even roll neither frees nor pays a penalized player.
#[test]
fn test_even_roll_then_correct_answer_stays_penalized() {
    let mut game = three_player_game();

    game.roll(2).unwrap();
    game.wrong_answer().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();
    game.roll(1).unwrap();
    game.was_correctly_answered().unwrap();

    assert_eq!(game.roll(4).unwrap(), RollOutcome::Stayed);
    game.was_correctly_answered().unwrap();

    assert_eq!(game.in_penalty_box(CHET), Some(true));
    assert_eq!(game.purse(CHET), Some(0));
    assert_eq!(game.current_player(), PAT);
}

// =============================================================================
// Endings
// =============================================================================

/// Six straight correct answers win.
#[test]
fn test_six_coins_win() {
    let mut game = three_player_game();

    while !game.have_winner() {
        game.roll(4).unwrap();
        game.was_correctly_answered().unwrap();
    }

    assert_eq!(game.outcome(), Some(Outcome::Winner(CHET)));
    assert_eq!(game.purse(CHET), Some(6));
    assert_eq!(game.purse(PAT), Some(5));
}

/// Draining a category ends the game in a draw.
#[test]
fn test_drained_category_draws() {
    let bank = QuestionBank::builder().question_limit(2).build();
    let mut game = Game::new(bank);
    game.add_player("Chet").unwrap();
    game.add_player("Pat").unwrap();

    game.roll(3).unwrap();
    game.wrong_answer().unwrap();
    assert_eq!(game.conclude(), None);

    game.roll(3).unwrap();
    game.wrong_answer().unwrap();

    assert_eq!(game.questions().remaining(Category::Rock), 0);
    assert!(game.is_draw());
    assert_eq!(game.conclude(), Some(Outcome::Draw));
    assert_eq!(
        game.events().last().map(ToString::to_string).as_deref(),
        Some("We don't have questions!!! Is Draw.")
    );

    // The engine refuses to ask from the empty category
    game.seat_mut(CHET).unwrap().in_penalty_box = false;
    assert_eq!(game.roll(3), Err(GameError::QuestionExhausted(Category::Rock)));
}

/// Any question source can back a game.
#[test]
fn test_custom_question_source() {
    struct OneEach {
        asked: Vec<Category>,
    }

    impl QuestionSource for OneEach {
        fn next_question(&mut self, category: Category) -> Option<String> {
            if self.asked.contains(&category) {
                return None;
            }
            self.asked.push(category);
            Some(format!("Only {} question", category))
        }

        fn remaining(&self, category: Category) -> usize {
            usize::from(!self.asked.contains(&category))
        }
    }

    let mut game = Game::new(OneEach { asked: Vec::new() });
    game.add_player("Chet").unwrap();
    game.add_player("Pat").unwrap();

    assert_eq!(game.roll(2).unwrap().question(), Some("Only Sports question"));
    assert!(game.is_draw());
}
