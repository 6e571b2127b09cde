//! Rollout (simulation) policies.
//!
//! A rollout plays random moves from a position until the game ends. The
//! policy only chooses among the legal moves it is given, so the tree walk
//! never depends on how moves are picked.

use baghchal_core::{Coord, GameError, GameState, Move, Outcome, Player};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Picks the next move during a rollout.
pub trait RolloutPolicy {
    /// Choose one of `moves` (the legal moves of `state`), or `None` if empty.
    fn choose(&self, state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Option<Move>;
}

/// Uniformly random move.
pub fn choose_uniform_random(moves: &[Move], rng: &mut dyn RngCore) -> Option<Move> {
    moves.choose(rng).copied()
}

/// Random play shaped like a human goat player: once all goats are on the
/// board, first pick a goat that can move, then one of its destinations.
/// Placements and tiger moves are uniform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceFirstRollout;

impl RolloutPolicy for PieceFirstRollout {
    fn choose(&self, state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Option<Move> {
        match state.current_player() {
            Player::Goat if !state.in_placement_phase() => choose_piece_then_move(moves, rng),
            _ => choose_uniform_random(moves, rng),
        }
    }
}

fn choose_piece_then_move(moves: &[Move], rng: &mut dyn RngCore) -> Option<Move> {
    let mut pieces: Vec<Coord> = moves.iter().filter_map(|m| m.source()).collect();
    pieces.sort();
    pieces.dedup();
    let piece = *pieces.choose(rng)?;
    let own: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|m| m.source() == Some(piece))
        .collect();
    choose_uniform_random(&own, rng)
}

/// Play `state` out with `policy` until it is terminal or the side to move
/// has no legal move. Each step reads the side to move from `state` itself.
///
/// Returns the final outcome, or `None` when play stalled without one.
pub fn simulate<P: RolloutPolicy + ?Sized>(
    state: &mut GameState,
    policy: &P,
    rng: &mut dyn RngCore,
) -> Result<Option<Outcome>, GameError> {
    let mut moves = Vec::with_capacity(32);
    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(Some(outcome));
        }
        baghchal_core::legal_moves_into(state, &mut moves);
        let Some(mv) = policy.choose(state, &moves, rng) else {
            return Ok(None);
        };
        state.apply_move(mv)?;
    }
}

#[cfg(test)]
#[path = "rollout_tests.rs"]
mod rollout_tests;
