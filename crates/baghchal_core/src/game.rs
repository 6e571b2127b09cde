use std::collections::HashMap;

use crate::{
    board::{Board, TIGER_START},
    error::GameError,
    movegen::legal_moves_into,
    rules::RuleConfig,
    types::*,
};

/// Full game state: board, piece counters, side to move and the
/// bookkeeping needed for the draw rules.
///
/// `tigers` is a cached index over the board's tiger cells; it always holds
/// exactly the four coordinates where the board has a tiger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) tigers: [Coord; TIGER_COUNT],
    pub(crate) goats_to_place: u8,
    pub(crate) goats_on_board: u8,
    pub(crate) captured_goats: u8,
    pub(crate) current_player: Player,
    pub(crate) state_history: HashMap<Board, u32>,
    // Highest count in `state_history`; counts never decrease.
    pub(crate) peak_repetition: u32,
    pub(crate) moves_since_progress: u32,
    pub(crate) rules: RuleConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Opening position: tigers in the corners, 20 goats in hand, goats to move.
    pub fn new() -> Self {
        Self::with_rules(RuleConfig::default())
    }

    pub fn with_rules(rules: RuleConfig) -> Self {
        GameState {
            board: Board::startpos(),
            tigers: TIGER_START,
            goats_to_place: TOTAL_GOATS,
            goats_on_board: 0,
            captured_goats: 0,
            current_player: Player::Goat,
            state_history: HashMap::new(),
            peak_repetition: 0,
            moves_since_progress: 0,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn tigers(&self) -> &[Coord; TIGER_COUNT] {
        &self.tigers
    }
    pub fn goats_to_place(&self) -> u8 {
        self.goats_to_place
    }
    pub fn goats_on_board(&self) -> u8 {
        self.goats_on_board
    }
    pub fn captured_goats(&self) -> u8 {
        self.captured_goats
    }
    pub fn current_player(&self) -> Player {
        self.current_player
    }
    pub fn moves_since_progress(&self) -> u32 {
        self.moves_since_progress
    }
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// How many times `board` has been reached after a move.
    pub fn occurrences(&self, board: &Board) -> u32 {
        self.state_history.get(board).copied().unwrap_or(0)
    }

    /// True while the goat side still has pieces in hand.
    pub fn in_placement_phase(&self) -> bool {
        self.goats_to_place > 0
    }

    /// Legal moves for the side to move; empty when it has none.
    pub fn get_possible_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(32);
        legal_moves_into(self, &mut out);
        out
    }

    /// True iff no tiger has a step or a jump.
    pub fn are_tigers_blocked(&self) -> bool {
        self.tigers.iter().all(|&t| self.board.is_stuck(t, true))
    }

    /// Check that `mv` is one `get_possible_moves` would produce, in O(1).
    pub fn validate_move(&self, mv: Move) -> Result<(), GameError> {
        let player = self.current_player;
        let illegal = Err(GameError::IllegalMove { mv, player });
        let to = mv.dest();
        if !to.on_board() || !self.board.is_empty_at(to) {
            return illegal;
        }
        match (player, mv) {
            (Player::Goat, Move::Place { .. }) if self.in_placement_phase() => Ok(()),
            (Player::Goat, Move::Relocate { from, to }) if !self.in_placement_phase() => {
                if from.on_board() && self.board.get(from) == Cell::Goat && is_step(from, to) {
                    Ok(())
                } else {
                    illegal
                }
            }
            (Player::Tiger, Move::Relocate { from, to }) => {
                if !from.on_board() || self.board.get(from) != Cell::Tiger {
                    return illegal;
                }
                if is_step(from, to) {
                    return Ok(());
                }
                match mv.jumped_over() {
                    Some(mid) if is_jump(from, to) && self.board.get(mid) == Cell::Goat => Ok(()),
                    _ => illegal,
                }
            }
            _ => illegal,
        }
    }

    /// Apply a legal move for the side to move, then update the repetition
    /// history and progress counter and pass the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.validate_move(mv)?;

        let mut captured = false;
        match mv {
            Move::Place { to } => {
                self.board.set(to, Cell::Goat);
                self.goats_to_place -= 1;
                self.goats_on_board += 1;
            }
            Move::Relocate { from, to } => {
                let piece = self.board.get(from);
                self.board.set(from, Cell::Empty);
                if piece == Cell::Tiger {
                    if let Some(mid) = mv.jumped_over() {
                        self.board.set(mid, Cell::Empty);
                        self.captured_goats += 1;
                        self.goats_on_board -= 1;
                        captured = true;
                    }
                    for t in self.tigers.iter_mut() {
                        if *t == from {
                            *t = to;
                        }
                    }
                }
                self.board.set(to, piece);
            }
        }

        let seen = self.state_history.entry(self.board).or_insert(0);
        *seen += 1;
        self.peak_repetition = self.peak_repetition.max(*seen);

        self.moves_since_progress = if captured || self.are_tigers_blocked() {
            0
        } else {
            self.moves_since_progress + 1
        };

        self.current_player = self.current_player.other();

        debug_assert!(
            self.check_invariants().is_ok(),
            "{:?}",
            self.check_invariants()
        );
        Ok(())
    }

    /// Some board configuration has recurred `repetition_limit` times.
    pub fn is_repetition_draw(&self) -> bool {
        self.peak_repetition >= self.rules.repetition_limit
    }

    pub fn is_no_progress_draw(&self) -> bool {
        self.moves_since_progress >= self.rules.no_progress_limit
    }

    /// Game result if the position is terminal.
    ///
    /// Captures are checked before blockades, and both before the draw rules.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.captured_goats >= self.rules.capture_win {
            return Some(Outcome::Winner(Player::Tiger));
        }
        if self.are_tigers_blocked() {
            return Some(Outcome::Winner(Player::Goat));
        }
        if self.is_repetition_draw() || self.is_no_progress_draw() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// `(terminal, winner)`; a terminal position without a winner is a draw.
    pub fn is_terminal(&self) -> (bool, Option<Player>) {
        match self.outcome() {
            Some(o) => (true, o.winner()),
            None => (false, None),
        }
    }

    /// Verify the piece accounting and that the tiger index matches the board.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let total = self.goats_to_place as u32
            + self.goats_on_board as u32
            + self.captured_goats as u32;
        if total != TOTAL_GOATS as u32 {
            return Err(GameError::InvariantViolation(format!(
                "goat accounting sums to {total}"
            )));
        }
        let on_board = self.board.count(Cell::Goat);
        if on_board != self.goats_on_board as usize {
            return Err(GameError::InvariantViolation(format!(
                "{on_board} goats on board, counter says {}",
                self.goats_on_board
            )));
        }
        let mut cached = self.tigers;
        cached.sort();
        let actual: Vec<Coord> = self.board.find(Cell::Tiger).collect();
        if actual.as_slice() != cached.as_slice() {
            return Err(GameError::InvariantViolation(format!(
                "tiger index {:?} does not match board {:?}",
                cached, actual
            )));
        }
        Ok(())
    }
}

fn delta(from: Coord, to: Coord) -> (i8, i8) {
    (to.row - from.row, to.col - from.col)
}

fn is_step(from: Coord, to: Coord) -> bool {
    directions(from).contains(&delta(from, to))
}

fn is_jump(from: Coord, to: Coord) -> bool {
    let (dr, dc) = delta(from, to);
    dr % 2 == 0 && dc % 2 == 0 && directions(from).contains(&(dr / 2, dc / 2))
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
