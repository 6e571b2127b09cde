use crate::{game::GameState, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all positions reachable from the current one at exactly `depth`
/// plies; terminal positions end their branch early and count as one leaf.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    fn inner(state: &GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || state.outcome().is_some() {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(state, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut next = state.clone();
            let applied = next.apply_move(mv);
            debug_assert!(applied.is_ok(), "generated move {mv} rejected: {applied:?}");
            if applied.is_ok() {
                nodes += inner(&next, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(state, depth, &mut layers[..])
}
