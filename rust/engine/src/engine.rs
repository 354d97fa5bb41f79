use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::errors::GameError;
use crate::game::{setup, GameState};
use crate::logger::RoundRecord;
use crate::outcome::{is_finished, resolve, GameResult};
use crate::rules::{self, Action};
use crate::view::TableView;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Owns the table for a single player against the dealer.
///
/// Holds the seeded random source used for every deal, the current
/// [`GameState`] and the actions applied since the last deal.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::game::Turn;
///
/// let mut engine = Engine::new(Some(12345));
/// assert_eq!(engine.state().remaining(), 48);
/// assert_eq!(engine.state().turn(), Turn::PlayerTurn);
///
/// engine.hit().unwrap();
/// assert_eq!(engine.state().player_hand().len(), 3);
/// assert!(engine.is_finished());
/// ```
#[derive(Debug)]
pub struct Engine {
    seed: u64,
    rng: ChaCha20Rng,
    state: GameState,
    actions: Vec<Action>,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let state = setup(&mut rng);
        info!(seed, "new table");
        Self {
            seed,
            rng,
            state,
            actions: Vec::new(),
        }
    }

    /// Starts from an arranged state instead of a shuffled deal. Later
    /// resets still shuffle with `seed`.
    pub fn with_state(seed: u64, state: GameState) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            state,
            actions: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Actions applied since the current round was dealt.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Applies `action` to the table.
    ///
    /// A rejected action leaves the table exactly as it was.
    pub fn apply(&mut self, action: Action) -> Result<&GameState, GameError> {
        let next = match action {
            Action::Hit => rules::hit(self.state.clone())?,
            Action::Stand => rules::stand(self.state.clone())?,
            Action::Reset => return Ok(self.reset()),
        };
        self.state = next;
        self.actions.push(action);
        if is_finished(&self.state) {
            info!(
                result = %resolve(&self.state),
                player_score = self.state.player_score(),
                dealer_score = self.state.dealer_score(),
                "round finished"
            );
        }
        Ok(&self.state)
    }

    pub fn hit(&mut self) -> Result<&GameState, GameError> {
        self.apply(Action::Hit)
    }

    pub fn stand(&mut self) -> Result<&GameState, GameError> {
        self.apply(Action::Stand)
    }

    pub fn reset(&mut self) -> &GameState {
        debug!(discarded = self.actions.len(), "reset");
        self.actions.clear();
        self.state = setup(&mut self.rng);
        &self.state
    }

    pub fn result(&self) -> GameResult {
        resolve(&self.state)
    }

    pub fn is_finished(&self) -> bool {
        is_finished(&self.state)
    }

    pub fn view(&self) -> TableView {
        TableView::of(&self.state)
    }

    /// Record of the current round, or `None` while it is still in play.
    pub fn round_record(&self, round_id: String) -> Option<RoundRecord> {
        if !self.is_finished() {
            return None;
        }
        Some(RoundRecord {
            round_id,
            seed: Some(self.seed),
            actions: self.actions.clone(),
            player_cards: self.state.player_hand().cards().to_vec(),
            dealer_cards: self.state.dealer_hand().cards().to_vec(),
            player_score: self.state.player_score(),
            dealer_score: self.state.dealer_score(),
            result: self.result(),
            ts: None,
        })
    }
}
