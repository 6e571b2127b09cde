use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 5;
pub const TOTAL_GOATS: u8 = 20;
pub const TIGER_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Goat,
    Tiger,
}
impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Goat => Player::Tiger,
            Player::Tiger => Player::Goat,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Goat => f.write_str("goat"),
            Player::Tiger => f.write_str("tiger"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Goat,
    Tiger,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Goat => 'G',
            Cell::Tiger => 'T',
        }
    }
}

/// An intersection on the 5x5 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Step `k` times along `(dr, dc)`, or `None` when that leaves the board.
    pub fn offset(self, dr: i8, dc: i8, k: i8) -> Option<Coord> {
        let c = Coord::new(self.row + dr * k, self.col + dc * k);
        c.on_board().then_some(c)
    }

    /// Cells with an even coordinate sum carry the diagonal lines.
    pub fn has_diagonals(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// A new goat enters the board (only while goats remain to be placed).
    Place { to: Coord },
    /// An already placed piece moves; covers goat steps, tiger steps and jumps.
    Relocate { from: Coord, to: Coord },
}

impl Move {
    pub fn place(row: i8, col: i8) -> Self {
        Move::Place {
            to: Coord::new(row, col),
        }
    }

    pub fn relocate(from: (i8, i8), to: (i8, i8)) -> Self {
        Move::Relocate {
            from: Coord::new(from.0, from.1),
            to: Coord::new(to.0, to.1),
        }
    }

    pub fn dest(self) -> Coord {
        match self {
            Move::Place { to } | Move::Relocate { to, .. } => to,
        }
    }

    pub fn source(self) -> Option<Coord> {
        match self {
            Move::Place { .. } => None,
            Move::Relocate { from, .. } => Some(from),
        }
    }

    /// The captured square if this relocation spans two cells.
    pub fn jumped_over(self) -> Option<Coord> {
        match self {
            Move::Relocate { from, to }
                if (from.row - to.row).abs() == 2 || (from.col - to.col).abs() == 2 =>
            {
                Some(Coord::new(
                    (from.row + to.row) / 2,
                    (from.col + to.col) / 2,
                ))
            }
            _ => None,
        }
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw => None,
        }
    }
}

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Directions probed from `c`: eight on diagonal-carrying cells, four elsewhere.
pub fn directions(c: Coord) -> &'static [(i8, i8)] {
    if c.has_diagonals() {
        &ALL_DIRECTIONS
    } else {
        &ORTHOGONAL
    }
}

// Helpers
pub fn coord_to_str(c: Coord) -> String {
    let f = (b'a' + c.col as u8) as char;
    let r = (b'1' + c.row as u8) as char;
    format!("{f}{r}")
}

pub fn str_to_coord(s: &str) -> Option<Coord> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'e').contains(&f) || !(b'1'..=b'5').contains(&r) {
        return None;
    }
    Some(Coord::new((r - b'1') as i8, (f - b'a') as i8))
}
