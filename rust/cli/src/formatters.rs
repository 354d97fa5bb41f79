//! Card, hand and table formatters for terminal display.
//!
//! Pure functions turning engine values into the lines the commands print.
//! A face-down card renders as `??`.

use blackjack_engine::cards::Card;
use blackjack_engine::game::Turn;
use blackjack_engine::outcome::GameResult;
use blackjack_engine::view::{Status, TableView};

pub fn format_card(card: &Card) -> String {
    card.to_string()
}

pub fn format_hidden(card: &Option<Card>) -> String {
    match card {
        Some(c) => format_card(c),
        None => "??".to_string(),
    }
}

/// Space-separated cards inside brackets, e.g. `[A♠ 10♥]`.
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

pub fn format_result(result: GameResult) -> &'static str {
    match result {
        GameResult::PlayerWin => "Player wins",
        GameResult::DealerWin => "Dealer wins",
        GameResult::Draw => "Draw",
        GameResult::NoResult => "No result",
    }
}

pub fn format_status(status: &Status) -> String {
    match status {
        Status::InPlay(Turn::PlayerTurn) => "Your turn".to_string(),
        Status::InPlay(Turn::DealerTurn) => "Dealer's turn".to_string(),
        Status::Finished(result) => format!("Result: {}", format_result(*result)),
    }
}

/// Multi-line rendering of a [`TableView`].
pub fn format_table(view: &TableView) -> Vec<String> {
    let dealer: Vec<String> = view.dealer_cards.iter().map(format_hidden).collect();
    let dealer_score = match view.dealer_score {
        Some(s) => s.to_string(),
        None => "?".to_string(),
    };
    vec![
        format!(
            "Player: {} ({})",
            format_cards(&view.player_cards),
            view.player_score
        ),
        format!("Dealer: [{}] ({})", dealer.join(" "), dealer_score),
        format!("Deck: {} cards left", view.remaining),
        format_status(&view.status),
    ]
}
