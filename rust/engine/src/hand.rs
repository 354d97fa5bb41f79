use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u32 = 21;

const ACE_HIGH: u32 = 11;

/// Best score of a hand.
///
/// Non-Ace cards count their base value. Aces are then resolved one at a
/// time: every Ace but the last counts 1, and the last counts 11 unless
/// that would push the total over 21. Scores above 21 are returned as-is
/// and mean the hand is bust. An empty hand scores 0.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::score;
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
/// ];
/// assert_eq!(score(&hand), 21);
/// ```
pub fn score(cards: &[Card]) -> u32 {
    let (total, aces) = fixed_total_and_aces(cards);
    let mut total = total;
    let mut remaining = aces;
    while remaining > 0 {
        let high = total + ACE_HIGH;
        if remaining > 1 || high > BLACKJACK {
            total += 1;
        } else {
            total = high;
        }
        remaining -= 1;
    }
    total
}

/// True when the last Ace of the hand is currently counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    let (fixed, aces) = fixed_total_and_aces(cards);
    // all other aces are hard, so the last one is soft iff it fits
    aces > 0 && fixed + (aces - 1) + ACE_HIGH <= BLACKJACK
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// True when the hand holds at least one Ace and at least one ten-valued
/// card. Hand length is not considered, so a three-card hand such as
/// `A, 5, K` also qualifies.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.rank.is_ace()) && cards.iter().any(|c| c.rank.is_ten_valued())
}

fn fixed_total_and_aces(cards: &[Card]) -> (u32, u32) {
    cards.iter().fold((0, 0), |(total, aces), c| {
        if c.rank.is_ace() {
            (total, aces + 1)
        } else {
            (total + c.rank.base_value(), aces)
        }
    })
}

/// The cards held by one participant, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
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

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn score(&self) -> u32 {
        score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }
}
