use std::collections::HashSet;

use blackjack_engine::cards::Card;
use blackjack_engine::deck::Deck;
use blackjack_engine::engine::Engine;
use blackjack_engine::errors::GameError;
use blackjack_engine::game::{deal, setup, GameState, Turn};
use blackjack_engine::outcome::{is_finished, resolve, GameResult};
use blackjack_engine::rules::{hit, stand, Action};
use blackjack_engine::view::Status;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn cards(notation: &[&str]) -> Vec<Card> {
    notation
        .iter()
        .map(|s| s.parse().expect("valid notation"))
        .collect()
}

/// Deck whose draw order is `order` (first element drawn first).
fn stacked(order: &[&str]) -> Deck {
    let mut v = cards(order);
    v.reverse();
    Deck::from_cards(v)
}

fn assert_partition(state: &GameState) {
    let all: Vec<Card> = state.all_cards().copied().collect();
    let unique: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn hit_grows_player_hand_and_passes_turn() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let state = setup(&mut rng);
    let before_deck = state.remaining();
    let before_hand = state.player_hand().len();
    let next = hit(state).unwrap();
    assert_eq!(next.turn(), Turn::DealerTurn);
    assert_eq!(next.player_hand().len(), before_hand + 1);
    assert_eq!(next.remaining(), before_deck - 1);
    assert_partition(&next);
}

#[test]
fn stand_with_dealer_sixteen_draws_once_and_returns_to_player() {
    // player 10+9, dealer 10+6, next card 3
    let state = deal(stacked(&["10S", "9S", "10H", "6H", "3C", "4C"])).unwrap();
    assert_eq!(state.dealer_score(), 16);
    let next = stand(state).unwrap();
    assert_eq!(next.dealer_hand().len(), 3);
    assert_eq!(next.dealer_score(), 19);
    assert_eq!(next.turn(), Turn::PlayerTurn);
    assert_eq!(next.remaining(), 1);
}

#[test]
fn stand_with_dealer_seventeen_leaves_hands() {
    let state = deal(stacked(&["10S", "9S", "10H", "7H", "3C"])).unwrap();
    let next = stand(state.clone()).unwrap();
    assert_eq!(next.player_hand(), state.player_hand());
    assert_eq!(next.dealer_hand(), state.dealer_hand());
    assert_eq!(next.remaining(), state.remaining());
    assert_eq!(next.turn(), Turn::DealerTurn);
    assert!(is_finished(&next));
    assert_eq!(resolve(&next), GameResult::PlayerWin);
}

#[test]
fn repeated_stands_step_the_dealer_until_it_stops() {
    // dealer starts on 2+3 and must draw 4, 5, 6 to reach 20
    let state = deal(stacked(&["10S", "8S", "2H", "3H", "4C", "5C", "6C", "KD"])).unwrap();
    let mut state = state;
    let mut steps = 0;
    while !is_finished(&state) {
        state = stand(state).unwrap();
        steps += 1;
        assert!(steps < 10, "dealer policy must terminate");
    }
    assert_eq!(steps, 4, "three draws plus the final settling stand");
    assert_eq!(state.dealer_score(), 20);
    assert_eq!(resolve(&state), GameResult::DealerWin);
}

#[test]
fn hit_is_rejected_after_the_round_settles() {
    let state = deal(stacked(&["10S", "9S", "10H", "7H", "3C"])).unwrap();
    let settled = stand(state).unwrap();
    assert!(matches!(
        hit(settled),
        Err(GameError::OutOfTurn {
            action: Action::Hit,
            turn: Turn::DealerTurn
        })
    ));
}

#[test]
fn player_can_bust_on_a_hit() {
    let state = deal(stacked(&["10S", "9S", "10H", "7H", "5C"])).unwrap();
    let next = hit(state).unwrap();
    assert_eq!(next.player_score(), 24);
    assert!(is_finished(&next));
    assert_eq!(resolve(&next), GameResult::DealerWin);
}

#[test]
fn engine_plays_whole_rounds_without_breaking_the_partition() {
    let mut engine = Engine::new(Some(2024));
    for _ in 0..50 {
        while !engine.is_finished() {
            let action = if engine.state().player_score() < 17 {
                Action::Hit
            } else {
                Action::Stand
            };
            engine.apply(action).unwrap();
            assert_partition(engine.state());
        }
        assert!(matches!(engine.view().status, Status::Finished(_)));
        assert_ne!(engine.result(), GameResult::NoResult);
        engine.apply(Action::Reset).unwrap();
        assert_eq!(engine.state().remaining(), 48);
    }
}
