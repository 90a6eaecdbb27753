//! Plays one simulated game of trivia and prints it to the console.
//!
//! Usage: `trivia [SEED]`. The seed may also come from `TRIVIA_SEED`; without
//! one, the clock picks it. Set `RUST_LOG=debug` to see engine logging.

use std::time::{SystemTime, UNIX_EPOCH};

use trivia::core::SessionConfig;
use trivia::game::Outcome;
use trivia::session::Session;

fn seed() -> Result<u64, std::num::ParseIntError> {
    match std::env::args().nth(1).or_else(|| std::env::var("TRIVIA_SEED").ok()) {
        Some(raw) => raw.trim().parse(),
        None => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let seed = seed()?;
    log::info!("starting game with seed {}", seed);

    let config = SessionConfig::default().with_seed(seed);
    let mut session = Session::with_players(["Chet", "Pat", "Sue"], config)?;
    for event in session.drain_events() {
        println!("{}", event);
    }

    let outcome = loop {
        let outcome = session.play_turn()?;
        for event in session.drain_events() {
            println!("{}", event);
        }
        if let Some(outcome) = outcome {
            break outcome;
        }
    };

    log_standings(&session, &outcome);
    Ok(())
}

fn log_standings(session: &Session, outcome: &Outcome) {
    log::info!("game over after {} turns", session.turns());
    for (player, seat) in session.game().seats() {
        let mark = if outcome.is_winner(player) { " (winner)" } else { "" };
        log::info!("{} finished with {} coins{}", seat.name, seat.purse, mark);
    }
}
