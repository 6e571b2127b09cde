//! Random Move Bagh Chal Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (MCTS should easily beat this)
//! - Stress testing move generation

use baghchal_core::{legal_moves_into, Engine, GameState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal moves for whichever side is to move.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        if state.is_terminal().0 {
            return SearchResult {
                best_move: None,
                score: 0.0,
                iterations: 0,
                nodes: 0,
            };
        }

        let mut moves = Vec::with_capacity(32);
        legal_moves_into(state, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            iterations: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match (name, value.parse()) {
            ("Seed", Ok(seed)) => {
                self.rng = StdRng::seed_from_u64(seed);
                true
            }
            _ => false,
        }
    }
}
