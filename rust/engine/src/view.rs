use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, Turn};
use crate::outcome::{is_finished, resolve, GameResult};

/// What a presenter should show for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Status {
    InPlay(Turn),
    Finished(GameResult),
}

/// A presenter-facing snapshot of the table.
///
/// While the player is on turn the dealer's first card is face down
/// (`None`) and the dealer score is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub player_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_cards: Vec<Option<Card>>,
    pub dealer_score: Option<u32>,
    pub remaining: usize,
    pub status: Status,
}

impl TableView {
    pub fn of(state: &GameState) -> Self {
        let concealed = state.turn() == Turn::PlayerTurn;
        let dealer_cards = state
            .dealer_hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(i, c)| if concealed && i == 0 { None } else { Some(*c) })
            .collect();
        let status = if is_finished(state) {
            Status::Finished(resolve(state))
        } else {
            Status::InPlay(state.turn())
        };
        Self {
            player_cards: state.player_hand().cards().to_vec(),
            player_score: state.player_score(),
            dealer_cards,
            dealer_score: (!concealed).then(|| state.dealer_score()),
            remaining: state.remaining(),
            status,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }
}
