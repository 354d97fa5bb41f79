use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered pile of cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A complete, unshuffled 52-card deck in canonical order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// A complete deck shuffled with the given random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        shuffle(Self::new(), rng)
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Builds a deck from an explicit card order, last card on top.
    ///
    /// Used to arrange deals in tests and replays; no completeness check is
    /// made.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a uniformly random permutation of `deck` (Fisher–Yates).
pub fn shuffle<R: Rng + ?Sized>(mut deck: Deck, rng: &mut R) -> Deck {
    deck.cards.shuffle(rng);
    deck
}

/// Removes the top card and returns it with the remaining deck.
pub fn take_card(mut deck: Deck) -> Result<(Card, Deck), GameError> {
    let card = deck.cards.pop().ok_or(GameError::DeckExhausted)?;
    Ok((card, deck))
}
