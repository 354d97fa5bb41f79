use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::deck::take_card;
use crate::errors::GameError;
use crate::game::{GameState, Turn};

/// The dealer must draw while its score is at or below this value.
pub const DEALER_DRAWS_TO: u32 = 16;

/// A request from the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Player takes one more card; the round then passes to the dealer.
    Hit,
    /// Run one step of the dealer's fixed policy.
    Stand,
    /// Throw the round away and deal a new one.
    Reset,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `action` may be applied while the table is on `turn`.
///
/// # Errors
///
/// Returns [`GameError::OutOfTurn`] for a hit while the dealer is on turn.
///
/// ```
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::game::Turn;
/// use blackjack_engine::rules::{validate_action, Action};
///
/// assert!(validate_action(Turn::PlayerTurn, Action::Hit).is_ok());
/// assert!(matches!(
///     validate_action(Turn::DealerTurn, Action::Hit),
///     Err(GameError::OutOfTurn { .. })
/// ));
/// ```
pub fn validate_action(turn: Turn, action: Action) -> Result<(), GameError> {
    match (action, turn) {
        (Action::Hit, Turn::DealerTurn) => Err(GameError::OutOfTurn { action, turn }),
        (Action::Hit, Turn::PlayerTurn) | (Action::Stand, _) | (Action::Reset, _) => Ok(()),
    }
}

/// True while the dealer's policy forces another card.
pub fn dealer_must_draw(state: &GameState) -> bool {
    state.dealer_score() <= DEALER_DRAWS_TO
}

/// Deals the player one card and hands the turn to the dealer.
///
/// # Errors
///
/// [`GameError::OutOfTurn`] when called on the dealer's turn and
/// [`GameError::DeckExhausted`] when no card is left. The input state is
/// consumed either way; callers that need to keep it should clone first.
pub fn hit(state: GameState) -> Result<GameState, GameError> {
    if let Err(e) = validate_action(state.turn, Action::Hit) {
        warn!(turn = %state.turn, "hit rejected");
        return Err(e);
    }
    let GameState {
        mut player_hand,
        dealer_hand,
        deck,
        ..
    } = state;
    let (card, deck) = take_card(deck)?;
    player_hand.push(card);
    debug!(
        card = %card,
        player_score = player_hand.score(),
        remaining = deck.len(),
        "player hits"
    );
    Ok(GameState {
        player_hand,
        dealer_hand,
        deck,
        turn: Turn::DealerTurn,
    })
}

/// Runs one step of the dealer's policy.
///
/// With a score of 16 or less the dealer draws a card and the turn goes back
/// to the player; otherwise the hands stay as they are and the turn settles
/// on the dealer, which marks the round ready for [`crate::outcome::resolve`].
pub fn stand(state: GameState) -> Result<GameState, GameError> {
    if !dealer_must_draw(&state) {
        debug!(dealer_score = state.dealer_score(), "dealer stands");
        return Ok(GameState {
            turn: Turn::DealerTurn,
            ..state
        });
    }
    let GameState {
        player_hand,
        mut dealer_hand,
        deck,
        ..
    } = state;
    let (card, deck) = take_card(deck)?;
    dealer_hand.push(card);
    debug!(
        card = %card,
        dealer_score = dealer_hand.score(),
        remaining = deck.len(),
        "dealer draws"
    );
    Ok(GameState {
        player_hand,
        dealer_hand,
        deck,
        turn: Turn::PlayerTurn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::deck::Deck;
    use crate::hand::Hand;

    fn cards(ranks: &[Rank], suit: Suit) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, suit)).collect()
    }

    fn table(player: &[Rank], dealer: &[Rank], deck: &[Rank], turn: Turn) -> GameState {
        GameState::from_parts(
            Hand::from_cards(cards(player, Suit::Hearts)),
            Hand::from_cards(cards(dealer, Suit::Spades)),
            Deck::from_cards(cards(deck, Suit::Clubs)),
            turn,
        )
    }

    #[test]
    fn hit_draws_top_card_and_passes_turn() {
        let state = table(
            &[Rank::Two, Rank::Three],
            &[Rank::Ten, Rank::Six],
            &[Rank::Nine, Rank::Four],
            Turn::PlayerTurn,
        );
        let next = hit(state).unwrap();
        assert_eq!(next.player_hand().len(), 3);
        assert_eq!(
            next.player_hand().cards()[2],
            Card::new(Rank::Four, Suit::Clubs)
        );
        assert_eq!(next.remaining(), 1);
        assert_eq!(next.turn(), Turn::DealerTurn);
        assert_eq!(next.dealer_hand().len(), 2);
    }

    #[test]
    fn hit_on_dealer_turn_is_rejected() {
        let state = table(&[Rank::Two], &[Rank::Ten], &[Rank::Nine], Turn::DealerTurn);
        assert_eq!(
            hit(state),
            Err(GameError::OutOfTurn {
                action: Action::Hit,
                turn: Turn::DealerTurn
            })
        );
    }

    #[test]
    fn hit_on_empty_deck_reports_exhaustion() {
        let state = table(&[Rank::Two], &[Rank::Ten], &[], Turn::PlayerTurn);
        assert_eq!(hit(state), Err(GameError::DeckExhausted));
    }

    #[test]
    fn dealer_at_sixteen_draws_and_returns_turn() {
        let state = table(
            &[Rank::Ten, Rank::Eight],
            &[Rank::Ten, Rank::Six],
            &[Rank::Five],
            Turn::DealerTurn,
        );
        let next = stand(state).unwrap();
        assert_eq!(next.dealer_hand().len(), 3);
        assert_eq!(next.dealer_score(), 21);
        assert_eq!(next.remaining(), 0);
        assert_eq!(next.turn(), Turn::PlayerTurn);
    }

    #[test]
    fn dealer_at_seventeen_stays_put() {
        let state = table(
            &[Rank::Ten, Rank::Eight],
            &[Rank::Ten, Rank::Seven],
            &[Rank::Five],
            Turn::PlayerTurn,
        );
        let before = state.clone();
        let next = stand(state).unwrap();
        assert_eq!(next.dealer_hand(), before.dealer_hand());
        assert_eq!(next.player_hand(), before.player_hand());
        assert_eq!(next.deck(), before.deck());
        assert_eq!(next.turn(), Turn::DealerTurn);
    }

    #[test]
    fn soft_seventeen_does_not_draw() {
        let state = table(&[Rank::Ten], &[Rank::Ace, Rank::Six], &[Rank::Five], Turn::PlayerTurn);
        assert!(!dealer_must_draw(&state));
    }

    #[test]
    fn stand_is_accepted_on_either_turn() {
        assert!(validate_action(Turn::PlayerTurn, Action::Stand).is_ok());
        assert!(validate_action(Turn::DealerTurn, Action::Stand).is_ok());
        assert!(validate_action(Turn::DealerTurn, Action::Reset).is_ok());
    }

    #[test]
    fn dealer_drawing_from_empty_deck_reports_exhaustion() {
        let state = table(&[Rank::Ten], &[Rank::Two], &[], Turn::PlayerTurn);
        assert_eq!(stand(state), Err(GameError::DeckExhausted));
    }
}
