//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec and refer to each other by NodeId, so the
//! parent back-links need no shared ownership and the whole tree is freed
//! at once when the search returns.

use baghchal_core::{GameState, Move, Outcome, Player};

use crate::node::{NodeId, SearchNode};

/// Backpropagated reward for a playout result, from the tigers' side.
pub fn reward(outcome: Option<Outcome>) -> f64 {
    match outcome {
        Some(Outcome::Winner(Player::Tiger)) => 1.0,
        Some(Outcome::Winner(Player::Goat)) => -1.0,
        // Draws and stalled playouts
        Some(Outcome::Draw) | None => 0.5,
    }
}

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree {
    /// Arena storing all nodes; the root is always at index 0
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a new tree rooted at a copy of `root_state`.
    pub fn new(root_state: GameState) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child reached from `parent` by `mv`, owning `state`.
    pub fn add_child(&mut self, parent: NodeId, mv: Move, state: GameState) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new_child(state, parent, mv));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Child of `id` with the highest UCB1 value.
    ///
    /// Unvisited children are skipped; `None` if no child has been visited.
    /// Ties keep the earliest child.
    pub fn best_child(&self, id: NodeId, exploration_weight: f64) -> Option<NodeId> {
        let node = self.get(id);
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &node.children {
            let Some(value) = self.get(child).ucb1(node.visits, exploration_weight) else {
                continue;
            };
            if best.is_none_or(|(_, b)| value > b) {
                best = Some((child, value));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Moves of `id`'s position that no child covers yet.
    pub fn unexpanded_moves(&self, id: NodeId, moves: &[Move]) -> Vec<Move> {
        let node = self.get(id);
        moves
            .iter()
            .copied()
            .filter(|mv| {
                !node
                    .children
                    .iter()
                    .any(|&c| self.get(c).last_move == Some(*mv))
            })
            .collect()
    }

    /// Add one visit and `reward` to every node from `leaf` up to the root.
    ///
    /// The reward is the same at every level, whichever side moved there.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.score += reward;
            current = node.parent;
        }
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root());
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_score: root.mean_score(),
            max_depth: self.compute_max_depth(self.root(), 0),
        }
    }

    fn compute_max_depth(&self, id: NodeId, current_depth: u32) -> u32 {
        self.get(id)
            .children
            .iter()
            .map(|&c| self.compute_max_depth(c, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about a search tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_score: f64,
    pub max_depth: u32,
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
