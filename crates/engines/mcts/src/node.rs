//! Search tree node.

use baghchal_core::{GameState, Move, Player};

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
///
/// Owns the position reached by `last_move` (the root owns the searched
/// position). `score` accumulates tiger-favourability: +1 per tiger win,
/// -1 per goat win, +0.5 per draw, whichever side is to move here.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visits: u32,
    pub score: f64,
    pub last_move: Option<Move>,
    /// Whether `state` is a finished game
    pub is_terminal: bool,
    legal_moves: usize,
}

impl SearchNode {
    pub fn new_root(state: GameState) -> Self {
        Self::new(state, None, None)
    }

    pub fn new_child(state: GameState, parent: NodeId, last_move: Move) -> Self {
        Self::new(state, Some(parent), Some(last_move))
    }

    fn new(state: GameState, parent: Option<NodeId>, last_move: Option<Move>) -> Self {
        let legal_moves = state.get_possible_moves().len();
        let is_terminal = state.outcome().is_some();
        Self {
            state,
            parent,
            children: Vec::new(),
            visits: 0,
            score: 0.0,
            last_move,
            is_terminal,
            legal_moves,
        }
    }

    /// Every legal move of this node's position already has a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.children.len() == self.legal_moves
    }

    /// Number of legal moves in this node's position.
    #[inline]
    pub fn legal_move_count(&self) -> usize {
        self.legal_moves
    }

    /// The player who chose between this node's children.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.state.current_player()
    }

    /// Average tiger-favourability of the playouts through this node.
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    /// UCB1 value of this node: `score / visits` plus the exploration term.
    ///
    /// The score is tiger-favourability for every node, whichever side
    /// chooses it. Unvisited nodes have no value.
    pub fn ucb1(&self, parent_visits: u32, exploration_weight: f64) -> Option<f64> {
        if self.visits == 0 {
            return None;
        }
        let visits = self.visits as f64;
        let exploitation = self.score / visits;
        let exploration =
            exploration_weight * ((parent_visits.max(1) as f64).ln() / visits).sqrt();
        Some(exploitation + exploration)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
