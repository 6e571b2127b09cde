use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const RELOCATION: &str = "TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4";

#[test]
fn test_uniform_random_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_uniform_random(&[], &mut rng), None);
}

#[test]
fn test_policy_returns_a_legal_move() {
    let mut rng = StdRng::seed_from_u64(3);
    for layout in [
        "T...T/...../...../...../T...T g 20 0",
        RELOCATION,
        "TGGGT/GGGGG/GGGGG/GGG../T...T t 0 4",
    ] {
        let state = GameState::from_layout(layout).unwrap();
        let moves = state.get_possible_moves();
        for _ in 0..50 {
            let mv = PieceFirstRollout.choose(&state, &moves, &mut rng).unwrap();
            assert!(moves.contains(&mv));
        }
    }
}

#[test]
fn test_goat_relocation_picks_piece_first() {
    // Five goats share eight moves; e3 has two of them. Choosing the goat
    // first gives e3-e4 a 1/5 * 1/2 chance instead of 1/8.
    let state = GameState::from_layout(RELOCATION).unwrap();
    let moves = state.get_possible_moves();
    assert_eq!(moves.len(), 8);
    let mut rng = StdRng::seed_from_u64(11);
    let target = Move::relocate((2, 4), (3, 4));

    let trials = 10_000;
    let hits = (0..trials)
        .filter(|_| PieceFirstRollout.choose(&state, &moves, &mut rng) == Some(target))
        .count();
    let expected = trials as f64 / 10.0;
    assert!(
        (hits as f64 - expected).abs() < expected * 0.15,
        "hits {hits}, expected about {expected}"
    );
}

#[test]
fn test_simulate_reaches_an_end() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let mut state = GameState::new();
        let outcome = simulate(&mut state, &PieceFirstRollout, &mut rng).unwrap();
        match outcome {
            Some(o) => assert_eq!(state.outcome(), Some(o)),
            None => assert!(state.get_possible_moves().is_empty()),
        }
    }
}

#[test]
fn test_simulate_on_terminal_state_is_immediate() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = GameState::from_layout("T...T/...../...../...../T...T t 15 5").unwrap();
    let before = state.clone();
    let outcome = simulate(&mut state, &PieceFirstRollout, &mut rng).unwrap();
    assert_eq!(outcome, Some(Outcome::Winner(Player::Tiger)));
    assert_eq!(state, before);
}

#[test]
fn test_simulate_switches_logic_with_side_to_move() {
    // Starts with goats placing; the rollout must hand tigers their own moves
    // and goats relocations once the last goat is placed.
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::from_layout("T...T/...../...../...../T...T g 20 0").unwrap();
    simulate(&mut state, &PieceFirstRollout, &mut rng).unwrap();
    assert!(state.check_invariants().is_ok());
}
