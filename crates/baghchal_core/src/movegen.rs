use crate::{board::Board, game::GameState, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.get_possible_moves()
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// - goats with pieces in hand: one placement per empty cell
/// - goats otherwise: every step of every goat on the board (no jumps)
/// - tigers: steps and jump-captures for each of the four tigers
pub fn legal_moves_into(state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    let board = state.board();
    match state.current_player() {
        Player::Goat if state.in_placement_phase() => {
            out.extend(board.find(Cell::Empty).map(|to| Move::Place { to }));
        }
        Player::Goat => goat_moves(board, out),
        Player::Tiger => {
            for &t in state.tigers() {
                board.adjacent_moves(t, true, out);
            }
        }
    }
}

fn goat_moves(board: &Board, out: &mut Vec<Move>) {
    for g in board.find(Cell::Goat) {
        board.adjacent_moves(g, false, out);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
