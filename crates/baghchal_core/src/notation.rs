//! Text formats for positions and moves.
//!
//! Layout: `<row0>/<row1>/<row2>/<row3>/<row4> <side> <in_hand> <captured> [<no_progress>]`
//! with rows made of `T`, `G` and `.`, and side `g` or `t`. Rows run from
//! row 0 downwards, columns left to right.
//!
//! Moves: squares are `a1`..`e5` (letter = column, digit = row + 1).
//! A placement is one square, a relocation is `from-to`.

use std::collections::HashMap;
use std::fmt;

use crate::{
    board::Board, error::GameError, game::GameState, rules::RuleConfig, types::*,
};

fn layout_err(msg: impl Into<String>) -> GameError {
    GameError::InvalidLayout(msg.into())
}

impl GameState {
    /// Parse a layout string. The repetition history starts empty.
    pub fn from_layout(layout: &str) -> Result<Self, GameError> {
        Self::from_layout_with_rules(layout, RuleConfig::default())
    }

    pub fn from_layout_with_rules(layout: &str, rules: RuleConfig) -> Result<Self, GameError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 5 {
            return Err(layout_err(format!(
                "expected 4 or 5 fields, got {}",
                parts.len()
            )));
        }

        let mut board = Board::empty();
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(layout_err(format!("expected 5 rows, got {}", rows.len())));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != BOARD_SIZE as usize {
                return Err(layout_err(format!("row {r} is not 5 cells: {row:?}")));
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'T' | 't' => Cell::Tiger,
                    'G' | 'g' => Cell::Goat,
                    '.' => Cell::Empty,
                    _ => return Err(layout_err(format!("invalid cell char {ch:?}"))),
                };
                board.set(Coord::new(r as i8, c as i8), cell);
            }
        }

        let tiger_cells: Vec<Coord> = board.find(Cell::Tiger).collect();
        let tigers: [Coord; TIGER_COUNT] = tiger_cells
            .as_slice()
            .try_into()
            .map_err(|_| layout_err(format!("expected 4 tigers, found {}", tiger_cells.len())))?;

        let current_player = match parts[1] {
            "g" | "G" => Player::Goat,
            "t" | "T" => Player::Tiger,
            other => return Err(layout_err(format!("invalid side to move {other:?}"))),
        };

        let goats_to_place: u8 = parts[2]
            .parse()
            .map_err(|_| layout_err(format!("invalid goats in hand {:?}", parts[2])))?;
        let captured_goats: u8 = parts[3]
            .parse()
            .map_err(|_| layout_err(format!("invalid captured count {:?}", parts[3])))?;
        let moves_since_progress: u32 = match parts.get(4) {
            Some(p) => p
                .parse()
                .map_err(|_| layout_err(format!("invalid progress counter {p:?}")))?,
            None => 0,
        };

        let goats_on_board = board.count(Cell::Goat) as u8;
        let total = goats_to_place as u32 + goats_on_board as u32 + captured_goats as u32;
        if total != TOTAL_GOATS as u32 {
            return Err(layout_err(format!(
                "{goats_to_place} in hand + {goats_on_board} on board + {captured_goats} captured != 20"
            )));
        }

        Ok(GameState {
            board,
            tigers,
            goats_to_place,
            goats_on_board,
            captured_goats,
            current_player,
            state_history: HashMap::new(),
            peak_repetition: 0,
            moves_since_progress,
            rules,
        })
    }

    pub fn to_layout(&self) -> String {
        let rows: Vec<String> = self
            .board
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect();
        let side = match self.current_player {
            Player::Goat => 'g',
            Player::Tiger => 't',
        };
        format!(
            "{} {} {} {} {}",
            rows.join("/"),
            side,
            self.goats_to_place,
            self.captured_goats,
            self.moves_since_progress
        )
    }
}

pub fn move_to_string(mv: Move) -> String {
    match mv {
        Move::Place { to } => coord_to_str(to),
        Move::Relocate { from, to } => format!("{}-{}", coord_to_str(from), coord_to_str(to)),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_string(*self))
    }
}

/// Parse move text and match it against the legal moves of `state`.
pub fn parse_move(state: &GameState, txt: &str) -> Result<Move, GameError> {
    let txt = txt.trim();
    let bad = || GameError::InvalidNotation(txt.to_string());
    let mv = match txt.split_once('-') {
        Some((a, b)) => Move::Relocate {
            from: str_to_coord(a).ok_or_else(bad)?,
            to: str_to_coord(b).ok_or_else(bad)?,
        },
        None => Move::Place {
            to: str_to_coord(txt).ok_or_else(bad)?,
        },
    };
    if state.get_possible_moves().contains(&mv) {
        Ok(mv)
    } else {
        Err(GameError::IllegalMove {
            mv,
            player: state.current_player(),
        })
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
