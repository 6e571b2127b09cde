use super::*;

#[test]
fn test_layout_roundtrip_opening() {
    let state = GameState::new();
    let layout = state.to_layout();
    assert_eq!(layout, "T...T/...../...../...../T...T g 20 0 0");
    assert_eq!(GameState::from_layout(&layout).unwrap(), state);
}

#[test]
fn test_layout_rejects_bad_input() {
    let cases = [
        "T...T/...../...../...../T...T g 20",
        "T...T/...../...../T...T g 20 0",
        "T...T/...../..x../...../T...T g 20 0",
        "T...T/...../..T../...../T...T g 20 0",
        "T...T/...../..G../...../T...T g 20 0",
        "T...T/...../...../...../T...T x 20 0",
        "T...T/...../...../...../T...T g twenty 0",
    ];
    for layout in cases {
        assert!(
            matches!(
                GameState::from_layout(layout),
                Err(GameError::InvalidLayout(_))
            ),
            "accepted {layout}"
        );
    }
}

#[test]
fn test_move_strings() {
    assert_eq!(move_to_string(Move::place(0, 0)), "a1");
    assert_eq!(move_to_string(Move::relocate((0, 0), (2, 2))), "a1-c3");
    assert_eq!(Move::place(4, 2).to_string(), "c5");
}

#[test]
fn test_parse_move_against_legal_moves() {
    let state = GameState::new();
    assert_eq!(parse_move(&state, "c3").unwrap(), Move::place(2, 2));
    assert!(matches!(
        parse_move(&state, "a1"),
        Err(GameError::IllegalMove { .. })
    ));
    assert!(matches!(
        parse_move(&state, "z9"),
        Err(GameError::InvalidNotation(_))
    ));

    let jump = GameState::from_layout("T...T/.G.../...../...../T...T t 19 0").unwrap();
    assert_eq!(
        parse_move(&jump, "a1-c3").unwrap(),
        Move::relocate((0, 0), (2, 2))
    );
}
