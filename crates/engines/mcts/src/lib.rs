//! Monte Carlo Tree Search engine for Bagh Chal.
//!
//! Builds a fresh tree for every decision, grows it with UCB1 selection and
//! uniformly random rollouts, and returns the most promising root move.
//! The tree is discarded when the search returns.
//!
//! # Usage
//!
//! ```rust,ignore
//! use baghchal_core::GameState;
//!
//! let mut game = GameState::new();
//! let mv = mcts_engine::search(&game, 500)?;
//! game.apply_move(mv)?;
//! ```
//!
//! # Scoring
//!
//! Every node accumulates the same reward along the path: +1 for a tiger
//! win, -1 for a goat win, +0.5 for a draw. Scores read as
//! tiger-favourability at every depth, and UCB1 uses `score / visits`
//! unchanged whichever side is to move.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

use baghchal_core::{Engine, GameState, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use rollout::{choose_uniform_random, simulate, RolloutPolicy, PieceFirstRollout};
pub use search::{run_mcts, ChildStats, MctsSearch, SearchError, SearchOutcome};
pub use tree::{reward, SearchTree, TreeStats};


/// Run `iterations` MCTS iterations from `state` and return the chosen move.
///
/// `state` is not modified. Fails with [`SearchError::NoLegalMoves`] when the
/// side to move has no move and [`SearchError::TerminalPosition`] when the
/// game is already over.
pub fn search(state: &GameState, iterations: u32) -> Result<Move, SearchError> {
    let config = MctsConfig::default().with_iterations(iterations);
    let mut rng = StdRng::from_entropy();
    run_mcts(state, &config, &PieceFirstRollout, &mut rng).map(|o| o.best_move)
}

/// Bagh Chal engine using Monte Carlo Tree Search with random rollouts.
#[derive(Debug, Clone)]
pub struct MctsEngine<P: RolloutPolicy = PieceFirstRollout> {
    config: MctsConfig,
    policy: P,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MctsEngine<PieceFirstRollout> {
    pub fn new() -> Self {
        Self::with_config(MctsConfig::default())
    }

    pub fn with_config(config: MctsConfig) -> Self {
        Self::with_policy(config, PieceFirstRollout)
    }
}

impl Default for MctsEngine<PieceFirstRollout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RolloutPolicy> MctsEngine<P> {
    pub fn with_policy(config: MctsConfig, policy: P) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            config,
            policy,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Full search result including root statistics.
    pub fn analyse(&mut self, state: &GameState) -> Result<SearchOutcome, SearchError> {
        let outcome = run_mcts(state, &self.config, &self.policy, &mut self.rng)?;
        self.nodes = outcome.stats.total_nodes as u64;
        Ok(outcome)
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

impl<P: RolloutPolicy + Send> Engine for MctsEngine<P> {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        self.config.iterations = limits.iterations;

        match self.analyse(state) {
            Ok(outcome) => SearchResult {
                best_move: Some(outcome.best_move),
                score: outcome.score,
                iterations: outcome.stats.root_visits,
                nodes: self.nodes,
            },
            Err(e) => {
                warn!(error = %e, "MCTS search returned no move");
                SearchResult {
                    best_move: None,
                    score: 0.0,
                    iterations: 0,
                    nodes: self.nodes,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Iterations" => match value.parse() {
                Ok(n) => {
                    self.config.iterations = n;
                    true
                }
                Err(_) => false,
            },
            "ExplorationWeight" => match value.parse() {
                Ok(c) => {
                    self.config.exploration_weight = c;
                    true
                }
                Err(_) => false,
            },
            "Seed" => match value.parse() {
                Ok(s) => {
                    self.config.seed = Some(s);
                    self.rng = StdRng::seed_from_u64(s);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
