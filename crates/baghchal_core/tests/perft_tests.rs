use baghchal_core::{GameState, legal_moves, perft};

#[test]
fn perft_opening_position() {
    let state = GameState::new();
    assert_eq!(perft(&state, 0), 1);
    assert_eq!(perft(&state, 1), 21);
    // Every first placement leaves each corner tiger exactly three moves
    assert_eq!(perft(&state, 2), 21 * 12);
}

#[test]
fn perft_does_not_mutate_input() {
    let state = GameState::new();
    let before = state.clone();
    perft(&state, 3);
    assert_eq!(state, before);
}

#[test]
fn perft_stops_at_terminal_positions() {
    let state = GameState::from_layout("T...T/...../...../...../T...T t 15 5").unwrap();
    assert_eq!(perft(&state, 3), 1);
}

#[test]
fn perft_counts_every_generated_move() {
    // Depth one must see each generated move accepted by apply_move
    for layout in [
        "T...T/.G.../...../...../T...T t 19 0",
        "T.G.T/.GG../G.T../...G./..G.T t 14 0",
        "T.G.T/.GG../G.T../...G./..G.T g 14 0",
        "TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4",
        "TGGGT/GGGGG/GGGGG/GGG../T...T t 0 4",
    ] {
        let state = GameState::from_layout(layout).unwrap();
        let moves = legal_moves(&state);
        assert!(!moves.is_empty(), "{layout}");
        for &mv in &moves {
            let mut next = state.clone();
            assert!(next.apply_move(mv).is_ok(), "{layout}: {mv} rejected");
        }
        assert_eq!(perft(&state, 1), moves.len() as u64, "{layout}");
    }
}
