//! Tests for terminal detection in Bagh Chal
//!
//! This module tests all end conditions:
//! - Tiger win by captures
//! - Goat win by blockade
//! - Repetition draw
//! - No-progress draw

use baghchal_core::{GameState, Move, Outcome, Player, RuleConfig};

/// Sixteen goats, every tiger but the bottom two hemmed in.
const SHUFFLE: &str = "TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4";

/// A goat shuffles c4<->c5 while the e5 tiger shuffles e5<->d5.
fn shuffle_cycle() -> [Move; 4] {
    [
        Move::relocate((3, 2), (4, 2)),
        Move::relocate((4, 4), (4, 3)),
        Move::relocate((4, 2), (3, 2)),
        Move::relocate((4, 3), (4, 4)),
    ]
}

// =============================================================================
// Win Tests
// =============================================================================

#[test]
fn test_five_captures_is_tiger_win_for_either_side_to_move() {
    for side in ["g", "t"] {
        let layout = format!("T...T/...../...../...../T...T {side} 15 5");
        let state = GameState::from_layout(&layout).unwrap();
        assert_eq!(state.is_terminal(), (true, Some(Player::Tiger)));
        assert_eq!(state.outcome(), Some(Outcome::Winner(Player::Tiger)));
    }
}

#[test]
fn test_four_captures_is_not_terminal() {
    let state = GameState::from_layout("T...T/...../...../...../T...T g 16 4").unwrap();
    assert_eq!(state.is_terminal(), (false, None));
}

#[test]
fn test_blocked_tigers_is_goat_win() {
    for side in ["g", "t"] {
        let layout = format!("TGGGT/GG.GG/G.G.G/GG.GG/TGGGT {side} 3 0");
        let state = GameState::from_layout(&layout).unwrap();
        assert!(state.are_tigers_blocked());
        assert!(state.get_possible_moves().is_empty() || side == "g");
        assert_eq!(state.is_terminal(), (true, Some(Player::Goat)));
    }
}

#[test]
fn test_blocking_placement_ends_game_and_resets_progress() {
    let mut state = GameState::from_layout("TGGGT/GG.GG/G...G/GG.GG/TGGGT g 4 0 20").unwrap();
    assert!(!state.are_tigers_blocked());

    state.apply_move(Move::place(2, 2)).unwrap();

    assert!(state.are_tigers_blocked());
    assert_eq!(state.moves_since_progress(), 0);
    assert_eq!(state.is_terminal(), (true, Some(Player::Goat)));
}

// =============================================================================
// Repetition Tests
// =============================================================================

#[test]
fn test_fifth_repetition_is_draw() {
    let mut state = GameState::from_layout(SHUFFLE).unwrap();
    let cycle = shuffle_cycle();

    for ply in 0..16 {
        state.apply_move(cycle[ply % 4]).unwrap();
        assert_eq!(state.is_terminal(), (false, None), "terminal after ply {}", ply + 1);
    }

    state.apply_move(cycle[0]).unwrap();
    assert!(state.is_repetition_draw());
    assert!(!state.is_no_progress_draw());
    assert_eq!(state.occurrences(state.board()), 5);
    assert_eq!(state.is_terminal(), (true, None));
    assert_eq!(state.outcome(), Some(Outcome::Draw));
}

// =============================================================================
// No-Progress Tests
// =============================================================================

#[test]
fn test_no_progress_draw_at_fifty_moves() {
    let rules = RuleConfig {
        repetition_limit: u32::MAX,
        ..RuleConfig::default()
    };
    let mut state = GameState::from_layout_with_rules(SHUFFLE, rules).unwrap();
    let cycle = shuffle_cycle();

    for ply in 0..49 {
        state.apply_move(cycle[ply % 4]).unwrap();
        assert!(!state.are_tigers_blocked());
        assert_eq!(state.is_terminal(), (false, None), "terminal after ply {}", ply + 1);
    }
    assert_eq!(state.moves_since_progress(), 49);

    state.apply_move(cycle[49 % 4]).unwrap();
    assert!(state.is_no_progress_draw());
    assert_eq!(state.is_terminal(), (true, None));
}

#[test]
fn test_no_progress_counter_from_layout() {
    let mut state = GameState::from_layout("TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4 48").unwrap();
    state.apply_move(Move::relocate((3, 2), (4, 2))).unwrap();
    assert_eq!(state.is_terminal(), (false, None));
    state.apply_move(Move::relocate((4, 4), (4, 3))).unwrap();
    assert_eq!(state.moves_since_progress(), 50);
    assert_eq!(state.is_terminal(), (true, None));
}

#[test]
fn test_custom_no_progress_limit() {
    let rules = RuleConfig {
        no_progress_limit: 2,
        ..RuleConfig::default()
    };
    let mut state = GameState::with_rules(rules);
    state.apply_move(Move::place(2, 2)).unwrap();
    assert!(!state.is_no_progress_draw());
    state.apply_move(Move::relocate((0, 0), (0, 1))).unwrap();
    assert!(state.is_no_progress_draw());
}
