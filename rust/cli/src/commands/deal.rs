//! Deal command handler for single opening-deal display.
//!
//! This module provides the `deal` command which shuffles a deck, deals the
//! opening two cards to player and dealer, and prints both hands face up
//! together with the deck count. The command supports optional seeding for
//! deterministic dealing.

use crate::error::CliError;
use crate::formatters::format_cards;
use blackjack_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let eng = Engine::new(Some(base_seed));
    let state = eng.state();

    writeln!(
        out,
        "Player: {} ({})",
        format_cards(state.player_hand().cards()),
        state.player_score()
    )?;
    writeln!(
        out,
        "Dealer: {} ({})",
        format_cards(state.dealer_hand().cards()),
        state.dealer_score()
    )?;
    writeln!(out, "Deck: {} cards left", state.remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(42), &mut out);

        assert!(result.is_ok(), "Deal command should succeed");

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player:"), "Output should contain player cards");
        assert!(output.contains("Dealer:"), "Output should contain dealer cards");
        assert!(output.contains("Deck: 48 cards left"));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deal_command(None, &mut out);

        assert!(result.is_ok(), "Deal command should succeed without seed");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3, "Output should have exactly 3 lines");
        assert!(lines[0].starts_with("Player: ["));
        assert!(lines[1].starts_with("Dealer: ["));
        assert!(lines[2].starts_with("Deck:"));
        // dealer shows both cards here, nothing is face down
        assert!(!lines[1].contains("??"));
    }
}
