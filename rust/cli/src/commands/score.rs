//! Score command: evaluate a hand written in card notation.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_cards;
use blackjack_engine::hand::Hand;
use std::io::Write;

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

/// Handle the score command.
///
/// Prints the hand, its score and whether it is soft, bust or holds the
/// ace/ten blackjack combination.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when a card token does not parse.
pub fn handle_score_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let hand = Hand::from_cards(cards);

    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    writeln!(out, "Score: {}", hand.score())?;
    writeln!(out, "Soft: {}", yes_no(hand.is_soft()))?;
    writeln!(out, "Bust: {}", yes_no(hand.is_bust()))?;
    writeln!(out, "Blackjack: {}", yes_no(hand.is_blackjack()))?;
    Ok(())
}
