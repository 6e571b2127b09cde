pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::GameError;
pub use game::GameState;
pub use movegen::*;
pub use notation::{move_to_string, parse_move};
pub use perft::perft;
pub use rules::RuleConfig;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Bagh Chal engines (MCTS, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Average outcome of the chosen move, tiger-favourable when positive
    pub score: f64,
    /// Number of search iterations performed
    pub iterations: u32,
    /// Number of tree nodes created (optional, for stats)
    pub nodes: u64,
}

/// Budget for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Number of select/expand/simulate/backpropagate iterations
    pub iterations: u32,
}

impl SearchLimits {
    pub fn iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::iterations(1000)
    }
}

/// Trait that all Bagh Chal engines must implement.
///
/// An engine may play either side; it reads the side to move from the state.
pub trait Engine: Send {
    /// Search the position with the given limits.
    ///
    /// # Arguments
    /// * `state` - The current position to analyze; never mutated
    /// * `limits` - Search budget
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "baghchal-mcts"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set an engine option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
