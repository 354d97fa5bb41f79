use thiserror::Error;

use crate::game::Turn;
use crate::rules::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: no card left to draw")]
    DeckExhausted,
    #[error("Cannot {action} during {turn}")]
    OutOfTurn { action: Action, turn: Turn },
    #[error("Invalid card notation: {0:?}")]
    InvalidCard(String),
}
