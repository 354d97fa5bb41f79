//! Input parsing and validation for interactive and argument input.

use blackjack_engine::cards::Card;
use blackjack_engine::errors::GameError;
use blackjack_engine::rules::Action;

/// Result of parsing user input during interactive play.
///
/// - Valid table action (hit, stand, reset)
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid table action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a table action or special command.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "r", "reset" or "new" → Reset
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_table_action, ParseResult};
/// use blackjack_engine::rules::Action;
///
/// assert_eq!(parse_table_action("HIT"), ParseResult::Action(Action::Hit));
/// assert_eq!(parse_table_action("q"), ParseResult::Quit);
///
/// match parse_table_action("double") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_table_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let Some(word) = input.split_whitespace().next() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match word {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Action(Action::Hit),
        "s" | "stand" => ParseResult::Action(Action::Stand),
        "r" | "reset" | "new" => ParseResult::Action(Action::Reset),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, reset, q",
            word
        )),
    }
}

/// Parse a list of cards in short notation (`AS`, `10h`, `kd`).
///
/// # Errors
///
/// Returns [`GameError::InvalidCard`] for the first token that does not
/// parse.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, GameError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms() {
        assert_eq!(parse_table_action("h"), ParseResult::Action(Action::Hit));
        assert_eq!(parse_table_action(" Stand "), ParseResult::Action(Action::Stand));
        assert_eq!(parse_table_action("s"), ParseResult::Action(Action::Stand));
        assert_eq!(parse_table_action("new"), ParseResult::Action(Action::Reset));
        assert_eq!(parse_table_action("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            parse_table_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }

    #[test]
    fn parse_cards_stops_at_first_bad_token() {
        assert_eq!(parse_cards(&["AS", "KH"]).unwrap().len(), 2);
        assert_eq!(
            parse_cards(&["AS", "ZZ", "KH"]),
            Err(GameError::InvalidCard("ZZ".to_string()))
        );
    }
}
