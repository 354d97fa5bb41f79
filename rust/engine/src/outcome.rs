use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, Turn};
use crate::hand::{is_blackjack, score, BLACKJACK};

/// Result of comparing the two hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// No decision. [`resolve`] never produces it for a real table, but
    /// presenters compare against it to decide whether a round is over.
    NoResult,
    PlayerWin,
    DealerWin,
    Draw,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::NoResult => "no_result",
            GameResult::PlayerWin => "player_win",
            GameResult::DealerWin => "dealer_win",
            GameResult::Draw => "draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the round from the two hands currently on the table.
pub fn resolve(state: &GameState) -> GameResult {
    resolve_hands(state.player_hand().cards(), state.dealer_hand().cards())
}

/// Compares a player hand with a dealer hand.
///
/// Checked in order, first match wins: player bust, dealer bust, both
/// holding blackjack, player ahead (blackjack or score), dealer ahead
/// (blackjack or score), equal scores.
pub fn resolve_hands(player: &[Card], dealer: &[Card]) -> GameResult {
    let player_score = score(player);
    let dealer_score = score(dealer);
    let player_bj = is_blackjack(player);
    let dealer_bj = is_blackjack(dealer);

    if player_score > BLACKJACK {
        GameResult::DealerWin
    } else if dealer_score > BLACKJACK {
        GameResult::PlayerWin
    } else if player_bj && dealer_bj {
        GameResult::Draw
    } else if player_bj || player_score > dealer_score {
        GameResult::PlayerWin
    } else if dealer_bj || dealer_score > player_score {
        GameResult::DealerWin
    } else if player_score == dealer_score {
        GameResult::Draw
    } else {
        GameResult::NoResult
    }
}

/// A round is over once the dealer holds the turn and a result is known.
pub fn is_finished(state: &GameState) -> bool {
    state.turn() == Turn::DealerTurn && resolve(state) != GameResult::NoResult
}
