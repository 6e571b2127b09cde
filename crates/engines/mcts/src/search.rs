//! MCTS search implementation.
//!
//! Each iteration runs four phases in order:
//! 1. Selection: descend through fully expanded nodes by UCB1
//! 2. Expansion: add one child for a move not yet in the tree
//! 3. Simulation: random rollout from the new node's position
//! 4. Backpropagation: update visits and scores up to the root

use baghchal_core::{GameError, GameState, Move};
use rand::seq::SliceRandom;
use rand::RngCore;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::{simulate, RolloutPolicy};
use crate::tree::{reward, SearchTree, TreeStats};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Position is already decided")]
    TerminalPosition,

    #[error("No root child was visited; run at least one iteration")]
    NoEvaluatedChild,

    #[error("Rule engine error: {0}")]
    Rules(#[from] GameError),
}

/// Visit statistics for one move at the root.
#[derive(Debug, Clone)]
pub struct ChildStats {
    pub mv: Move,
    pub visits: u32,
    /// Mean tiger-favourability of playouts through this move
    pub mean_score: f64,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Move of the best root child by UCB1
    pub best_move: Move,
    /// Mean tiger-favourability of `best_move`
    pub score: f64,
    /// Root statistics, in expansion order
    pub children: Vec<ChildStats>,
    pub stats: TreeStats,
}

/// MCTS search state for one decision. The tree is dropped with it.
pub struct MctsSearch<'a, P: RolloutPolicy + ?Sized> {
    tree: SearchTree,
    root_state: &'a GameState,
    config: &'a MctsConfig,
    policy: &'a P,
}

impl<'a, P: RolloutPolicy + ?Sized> MctsSearch<'a, P> {
    pub fn new(root_state: &'a GameState, config: &'a MctsConfig, policy: &'a P) -> Self {
        Self {
            tree: SearchTree::new(root_state.clone()),
            root_state,
            config,
            policy,
        }
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Run `config.iterations` iterations and pick the best root move.
    pub fn run(&mut self, rng: &mut dyn RngCore) -> Result<SearchOutcome, SearchError> {
        let root = self.tree.get(self.tree.root());
        if root.is_terminal {
            return Err(SearchError::TerminalPosition);
        }
        if root.legal_move_count() == 0 {
            return Err(SearchError::NoLegalMoves);
        }

        for _ in 0..self.config.iterations {
            self.iterate(rng)?;
        }

        let root = self.tree.root();
        let best = self
            .tree
            .best_child(root, self.config.exploration_weight)
            .ok_or(SearchError::NoEvaluatedChild)?;
        let best_node = self.tree.get(best);
        let best_move = best_node.last_move.ok_or(SearchError::NoEvaluatedChild)?;
        let score = best_node.mean_score();

        let children = self
            .tree
            .get(root)
            .children
            .iter()
            .filter_map(|&c| {
                let node = self.tree.get(c);
                node.last_move.map(|mv| ChildStats {
                    mv,
                    visits: node.visits,
                    mean_score: node.mean_score(),
                })
            })
            .collect();

        let stats = self.tree.stats();
        debug!(
            iterations = self.config.iterations,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            root_visits = stats.root_visits,
            best_move = %best_move,
            score,
            "MCTS search complete"
        );

        Ok(SearchOutcome {
            best_move,
            score,
            children,
            stats,
        })
    }

    /// One select -> expand -> simulate -> backpropagate pass.
    fn iterate(&mut self, rng: &mut dyn RngCore) -> Result<(), SearchError> {
        let mut state = self.root_state.clone();

        let mut node = self.select(&mut state)?;
        node = self.expand(node, &mut state, rng)?;

        let outcome = simulate(&mut state, self.policy, rng)?;
        let value = reward(outcome);
        self.tree.backpropagate(node, value);

        trace!(leaf = node.0, ?outcome, value, "MCTS iteration complete");
        Ok(())
    }

    /// Descend while the node is fully expanded and has visited children,
    /// replaying each chosen move on `state`.
    fn select(&self, state: &mut GameState) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if node.is_terminal || !node.is_fully_expanded() || node.children.is_empty() {
                return Ok(current);
            }
            let Some(child) = self.tree.best_child(current, self.config.exploration_weight) else {
                return Ok(current);
            };
            if let Some(mv) = self.tree.get(child).last_move {
                state.apply_move(mv)?;
            }
            current = child;
        }
    }

    /// Add a child for a random untried move of `node`, unless the node is
    /// terminal or already fully expanded. Returns the node to simulate from.
    fn expand(
        &mut self,
        node: NodeId,
        state: &mut GameState,
        rng: &mut dyn RngCore,
    ) -> Result<NodeId, SearchError> {
        let leaf = self.tree.get(node);
        if leaf.is_terminal || leaf.is_fully_expanded() {
            return Ok(node);
        }

        let moves = state.get_possible_moves();
        let untried = self.tree.unexpanded_moves(node, &moves);
        let Some(&mv) = untried.choose(rng) else {
            return Ok(node);
        };
        state.apply_move(mv)?;
        Ok(self.tree.add_child(node, mv, state.clone()))
    }
}

/// Run a search with `config` and the given rollout policy.
pub fn run_mcts<P: RolloutPolicy + ?Sized>(
    state: &GameState,
    config: &MctsConfig,
    policy: &P,
    rng: &mut dyn RngCore,
) -> Result<SearchOutcome, SearchError> {
    MctsSearch::new(state, config, policy).run(rng)
}
