//! Simulation command handler.
//!
//! Plays many rounds with a fixed player policy: stand on 17 or more,
//! otherwise hit. Each stand runs one step of the dealer policy, so a round
//! is played exactly as an interactive player would click through it.
//! Outcome tallies are printed at the end and, with `--output`, every round
//! is appended to a JSONL file.

use crate::error::CliError;
use blackjack_engine::engine::Engine;
use blackjack_engine::game::GameState;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::outcome::GameResult;
use blackjack_engine::rules::Action;
use std::io::Write;

/// Score at which the simulated player stops hitting.
pub const PLAYER_STANDS_ON: u32 = 17;

/// Outcome counts over a simulation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerWin => self.player_wins += 1,
            GameResult::DealerWin => self.dealer_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::NoResult => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.draws
    }
}

/// The simulated player's choice for `state`.
pub fn player_policy(state: &GameState) -> Action {
    if state.player_score() >= PLAYER_STANDS_ON {
        Action::Stand
    } else {
        Action::Hit
    }
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `seed` - Seed for the table (default: random)
/// * `output` - Optional JSONL path receiving one record per round
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        crate::ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut logger = output.map(RoundLogger::create).transpose()?;

    writeln!(out, "sim: rounds={} seed={}", rounds, seed)?;
    let mut eng = Engine::new(Some(seed));
    let mut tally = Tally::default();

    for i in 0..rounds {
        if i > 0 {
            eng.reset();
        }
        while !eng.is_finished() {
            let action = player_policy(eng.state());
            eng.apply(action)?;
        }
        tally.record(eng.result());
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            if let Some(record) = eng.round_record(id) {
                logger.write(&record)?;
            }
        }
    }

    let rate = f64::from(tally.player_wins) * 100.0 / f64::from(tally.total().max(1));
    writeln!(out, "Player wins: {}", tally.player_wins)?;
    writeln!(out, "Dealer wins: {}", tally.dealer_wins)?;
    writeln!(out, "Draws: {}", tally.draws)?;
    writeln!(out, "Player win rate: {:.1}%", rate)?;
    Ok(())
}
