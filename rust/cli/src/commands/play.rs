//! # Play Command
//!
//! Interactive play against the dealer.
//!
//! The table is printed after every action with the dealer's first card
//! face down while it is the player's turn. Once a round is decided only
//! `reset` and `quit` are accepted. When a history file is configured, each
//! finished round is appended to it as one JSON line.

use crate::error::CliError;
use crate::formatters::format_table;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_table_action};
use blackjack_engine::engine::Engine;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::rules::Action;
use std::io::{BufRead, Write};

/// Handle the play command: interactive rounds read from `stdin`.
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `history` - Optional JSONL path receiving finished rounds
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` when the user quits or input ends
/// * `Err(CliError)` if the history file cannot be written or I/O fails
pub fn handle_play_command(
    seed: Option<u64>,
    history: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut logger = history.map(RoundLogger::create).transpose()?;

    writeln!(out, "play: seed={}", seed)?;
    let mut eng = Engine::new(Some(seed));
    write_table(&eng, out)?;

    let mut finished = 0u32;
    loop {
        if eng.is_finished() {
            write!(out, "Enter action (reset/q): ")?;
        } else {
            write!(out, "Enter action (hit/stand/reset/q): ")?;
        }
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            break;
        };
        let action = match parse_table_action(&input) {
            ParseResult::Action(action) => action,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        if eng.is_finished() && action != Action::Reset {
            ui::write_error(err, "Round is over. Enter reset or q.")?;
            continue;
        }
        if let Err(e) = eng.apply(action) {
            ui::write_error(err, &format!("Invalid action: {}", e))?;
            continue;
        }

        writeln!(out, "Action: {}", action)?;
        write_table(&eng, out)?;

        if action != Action::Reset && eng.is_finished() {
            finished += 1;
            if let Some(logger) = logger.as_mut() {
                let id = logger.next_id();
                if let Some(record) = eng.round_record(id) {
                    logger.write(&record)?;
                }
            }
        }
    }

    writeln!(out, "Rounds finished: {}", finished)?;
    Ok(())
}

fn write_table(eng: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    for line in format_table(&eng.view()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
