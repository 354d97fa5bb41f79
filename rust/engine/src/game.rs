use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::{take_card, Deck};
use crate::errors::GameError;
use crate::hand::Hand;

/// Whose move the table is waiting on.
///
/// There is no "finished" turn; a round is over once the turn is
/// [`Turn::DealerTurn`] and the outcome resolver reports a result.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    PlayerTurn,
    DealerTurn,
}

impl Turn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Turn::PlayerTurn => "player_turn",
            Turn::DealerTurn => "dealer_turn",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a round: both hands, the undealt cards and the turn.
///
/// Between them the two hands and the deck always hold each card of the
/// original 52 exactly once. Transitions consume a state and return the next
/// one; see [`crate::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) player_hand: Hand,
    pub(crate) dealer_hand: Hand,
    pub(crate) deck: Deck,
    pub(crate) turn: Turn,
}

impl GameState {
    /// Assembles a state from explicit parts, for arranged scenarios.
    pub fn from_parts(player_hand: Hand, dealer_hand: Hand, deck: Deck, turn: Turn) -> Self {
        Self {
            player_hand,
            dealer_hand,
            deck,
            turn,
        }
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn player_score(&self) -> u32 {
        self.player_hand.score()
    }

    pub fn dealer_score(&self) -> u32 {
        self.dealer_hand.score()
    }

    /// Every card on the table and in the deck.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.player_hand
            .cards()
            .iter()
            .chain(self.dealer_hand.cards())
            .chain(self.deck.cards())
    }
}

/// Shuffles a fresh deck and deals the opening hands.
pub fn setup<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    deal(Deck::shuffled(rng))
        .unwrap_or_else(|e| unreachable!("opening deal from a full deck failed: {e}"))
}

/// Deals two cards to the player, then two to the dealer, from the top of
/// `deck`. The player acts first.
pub fn deal(deck: Deck) -> Result<GameState, GameError> {
    let mut player_hand = Hand::new();
    let mut dealer_hand = Hand::new();
    let mut deck = deck;
    for hand in [&mut player_hand, &mut dealer_hand] {
        for _ in 0..2 {
            let (card, rest) = take_card(deck)?;
            hand.push(card);
            deck = rest;
        }
    }
    debug!(
        player_score = player_hand.score(),
        dealer_score = dealer_hand.score(),
        remaining = deck.len(),
        "opening deal"
    );
    Ok(GameState {
        player_hand,
        dealer_hand,
        deck,
        turn: Turn::PlayerTurn,
    })
}
