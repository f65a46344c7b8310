//! Board representation for Gobang

pub mod board;
pub mod heat;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use board::{Board, MoveRecord};
pub use heat::HeatMap;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Largest board the engine accepts (positions are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = 19;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Signed coordinates `step` cells away along `(dr, dc)`; may fall off the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, step: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * step,
            i32::from(self.col) + dc * step,
        )
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Ordered `(mover, opponent)` pairing.
///
/// Scores are always reported from `mine`'s perspective; the search swaps the
/// pair at every ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Players {
    pub mine: Stone,
    pub theirs: Stone,
}

impl Players {
    /// Pairing with `stone` to move against its opponent.
    #[inline]
    pub fn new(stone: Stone) -> Self {
        Self {
            mine: stone,
            theirs: stone.opponent(),
        }
    }

    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            mine: self.theirs,
            theirs: self.mine,
        }
    }
}
