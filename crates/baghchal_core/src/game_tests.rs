use super::*;

const SHUFFLE: &str = "TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4";
const JUMP: &str = "T...T/.G.../...../...../T...T t 19 0 30";

#[test]
fn test_opening_counters() {
    let state = GameState::new();
    assert_eq!(state.goats_to_place(), 20);
    assert_eq!(state.goats_on_board(), 0);
    assert_eq!(state.captured_goats(), 0);
    assert_eq!(state.current_player(), Player::Goat);
    assert_eq!(state.tigers(), &TIGER_START);
    assert!(state.check_invariants().is_ok());
    assert_eq!(state.is_terminal(), (false, None));
}

#[test]
fn test_placement_updates_counters_and_flips_player() {
    let mut state = GameState::new();
    state.apply_move(Move::place(2, 2)).unwrap();

    assert_eq!(state.board().get(Coord::new(2, 2)), Cell::Goat);
    assert_eq!(state.goats_to_place(), 19);
    assert_eq!(state.goats_on_board(), 1);
    assert_eq!(state.current_player(), Player::Tiger);
    assert_eq!(state.occurrences(state.board()), 1);
    assert_eq!(state.moves_since_progress(), 1);
}

#[test]
fn test_goat_relocation() {
    let mut state = GameState::from_layout(SHUFFLE).unwrap();
    state.apply_move(Move::relocate((3, 2), (4, 2))).unwrap();

    assert_eq!(state.board().get(Coord::new(3, 2)), Cell::Empty);
    assert_eq!(state.board().get(Coord::new(4, 2)), Cell::Goat);
    assert_eq!(state.goats_on_board(), 16);
    assert_eq!(state.current_player(), Player::Tiger);
}

#[test]
fn test_jump_capture_updates_board_and_tiger_index() {
    let mut state = GameState::from_layout(JUMP).unwrap();
    let jump = Move::relocate((0, 0), (2, 2));
    assert!(state.get_possible_moves().contains(&jump));

    state.apply_move(jump).unwrap();

    assert_eq!(state.board().get(Coord::new(1, 1)), Cell::Empty);
    assert_eq!(state.board().get(Coord::new(2, 2)), Cell::Tiger);
    assert_eq!(state.board().get(Coord::new(0, 0)), Cell::Empty);
    assert_eq!(state.captured_goats(), 1);
    assert_eq!(state.goats_on_board(), 0);
    assert!(state.tigers().contains(&Coord::new(2, 2)));
    assert!(!state.tigers().contains(&Coord::new(0, 0)));
    assert_eq!(state.moves_since_progress(), 0, "capture resets progress");
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_tiger_step_keeps_other_tigers() {
    let mut state = GameState::new();
    state.apply_move(Move::place(2, 2)).unwrap();
    state.apply_move(Move::relocate((4, 4), (3, 3))).unwrap();

    let mut tigers = *state.tigers();
    tigers.sort();
    assert_eq!(
        tigers,
        [
            Coord::new(0, 0),
            Coord::new(0, 4),
            Coord::new(3, 3),
            Coord::new(4, 0)
        ]
    );
    assert_eq!(state.captured_goats(), 0);
}

#[test]
fn test_illegal_moves_are_rejected() {
    let mut state = GameState::new();

    // Occupied cell
    assert!(matches!(
        state.apply_move(Move::place(0, 0)),
        Err(GameError::IllegalMove { .. })
    ));
    // Relocation while goats remain in hand
    assert!(state.apply_move(Move::relocate((0, 0), (0, 1))).is_err());

    state.apply_move(Move::place(2, 2)).unwrap();
    // Tigers never place
    assert!(state.apply_move(Move::place(1, 2)).is_err());
    // Jump over an empty cell
    assert!(state.apply_move(Move::relocate((0, 0), (0, 2))).is_err());
    // Diagonal from a cell without diagonals
    let mut shuffle = GameState::from_layout(SHUFFLE).unwrap();
    assert!(shuffle.apply_move(Move::relocate((3, 2), (4, 3))).is_err());
    // Goats do not jump
    assert!(shuffle.apply_move(Move::relocate((3, 1), (3, 3))).is_err());
    // Placement after all goats are in play
    assert!(shuffle.apply_move(Move::place(4, 2)).is_err());
}

#[test]
fn test_rejected_move_leaves_state_untouched() {
    let mut state = GameState::from_layout(SHUFFLE).unwrap();
    let before = state.clone();
    assert!(state.apply_move(Move::relocate((0, 0), (1, 1))).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_clone_is_independent() {
    let original = GameState::new();
    let mut copy = original.clone();
    copy.apply_move(Move::place(1, 1)).unwrap();
    copy.apply_move(Move::relocate((0, 0), (2, 2))).unwrap();

    assert_eq!(original.board(), &Board::startpos());
    assert_eq!(original.goats_to_place(), 20);
    assert_eq!(original.captured_goats(), 0);
    assert_eq!(original.current_player(), Player::Goat);
    assert_eq!(original.tigers(), &TIGER_START);
    assert_eq!(original.occurrences(copy.board()), 0);
}

#[test]
fn test_check_invariants_detects_stale_tiger_index() {
    let mut state = GameState::new();
    state.tigers[0] = Coord::new(2, 2);
    assert!(matches!(
        state.check_invariants(),
        Err(GameError::InvariantViolation(_))
    ));
}

#[test]
fn test_progress_counter_counts_quiet_moves() {
    let mut state = GameState::new();
    state.apply_move(Move::place(2, 2)).unwrap();
    state.apply_move(Move::relocate((0, 0), (0, 1))).unwrap();
    state.apply_move(Move::place(2, 3)).unwrap();
    assert_eq!(state.moves_since_progress(), 3);
}
