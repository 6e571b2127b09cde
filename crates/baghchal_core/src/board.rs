use serde::{Deserialize, Serialize};

use crate::types::*;

/// The 5x5 grid of intersections. Also serves as the canonical snapshot
/// recorded in the repetition history, so it hashes by cell contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 5]; 5],
}

pub const TIGER_START: [Coord; TIGER_COUNT] = [
    Coord::new(0, 0),
    Coord::new(0, 4),
    Coord::new(4, 0),
    Coord::new(4, 4),
];

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tigers on the four corners, everything else empty.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for c in TIGER_START {
            b.set(c, Cell::Tiger);
        }
        b
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.row as usize][c.col as usize]
    }

    #[inline]
    pub fn set(&mut self, c: Coord, cell: Cell) {
        self.cells[c.row as usize][c.col as usize] = cell;
    }

    #[inline]
    pub fn is_empty_at(&self, c: Coord) -> bool {
        self.get(c) == Cell::Empty
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Coord::new(r, c)))
    }

    /// Coordinates currently holding `cell`, row-major.
    pub fn find(&self, cell: Cell) -> impl Iterator<Item = Coord> + '_ {
        Board::coords().filter(move |&c| self.get(c) == cell)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.find(cell).count()
    }

    pub fn rows(&self) -> &[[Cell; 5]; 5] {
        &self.cells
    }

    /// Step and (optionally) jump destinations for the piece on `from`.
    ///
    /// A step goes to an adjacent empty cell along one of the directions the
    /// cell carries. A jump goes over an adjacent goat to the empty cell
    /// directly beyond it in the same direction.
    pub fn adjacent_moves(&self, from: Coord, jump: bool, out: &mut Vec<Move>) {
        for &(dr, dc) in directions(from) {
            let Some(next) = from.offset(dr, dc, 1) else {
                continue;
            };
            match self.get(next) {
                Cell::Empty => out.push(Move::Relocate { from, to: next }),
                Cell::Goat if jump => {
                    if let Some(land) = from.offset(dr, dc, 2)
                        && self.is_empty_at(land)
                    {
                        out.push(Move::Relocate { from, to: land });
                    }
                }
                _ => {}
            }
        }
    }

    /// True if the piece on `from` has neither a step nor (when `jump`) a jump.
    pub fn is_stuck(&self, from: Coord, jump: bool) -> bool {
        for &(dr, dc) in directions(from) {
            let Some(next) = from.offset(dr, dc, 1) else {
                continue;
            };
            match self.get(next) {
                Cell::Empty => return false,
                Cell::Goat if jump => {
                    if let Some(land) = from.offset(dr, dc, 2)
                        && self.is_empty_at(land)
                    {
                        return false;
                    }
                }
                _ => {}
            }
        }
        true
    }
}
