//! # blackjack-engine: Single-Deck Dealer Game Rules
//!
//! Rules engine for one player against a fixed-strategy dealer, played from
//! a single 52-card deck. Every transition is a plain function from one
//! [`game::GameState`] to the next; randomness only enters through the
//! shuffle, which takes any [`rand::Rng`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card notation
//! - [`deck`] - Deck construction, shuffling and drawing from the top
//! - [`hand`] - Hand scoring with variable-value Aces
//! - [`outcome`] - Win/loss/draw resolution between player and dealer
//! - [`rules`] - Hit and stand transitions and the dealer policy
//! - [`game`] - Game state and the opening deal
//! - [`engine`] - Seeded table orchestration and action history
//! - [`view`] - Presenter snapshot with the dealer's hole card hidden
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::score;
//!
//! let hand = [
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Clubs, rank: Rank::Queen },
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//! ];
//! assert_eq!(score(&hand), 21);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Deals are reproducible from a seed:
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let deck1 = Deck::shuffled_with_seed(42);
//! let deck2 = Deck::shuffled_with_seed(42);
//! assert_eq!(deck1, deck2);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use blackjack_engine::game::setup;
//! use blackjack_engine::outcome::{is_finished, resolve};
//! use blackjack_engine::rules::stand;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let mut state = setup(&mut rng);
//! while !is_finished(&state) {
//!     state = stand(state).expect("deck holds enough cards");
//! }
//! println!("{}", resolve(&state));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod outcome;
pub mod rules;
pub mod view;
