//! Board structure with heat tracking and move history

use super::heat::HeatMap;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{GameError, InvalidMoveReason};

/// Game board.
///
/// Cells are mutated in place by the search and restored on backtrack; the
/// heat map is kept in lockstep with every placement and removal.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    heat: HeatMap,
    /// Moves applied through `apply_move`, oldest first
    history: Vec<MoveRecord>,
}

/// Record of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
}

impl Board {
    /// Create an empty `size x size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= MAX_BOARD_SIZE,
            "board size {size} out of range 1..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            heat: HeatMap::new(size),
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check whether signed coordinates lie on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Check whether a position lies on the board
    #[inline]
    pub fn contains_pos(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Activity heat at a position
    #[inline]
    pub fn heat(&self, pos: Pos) -> u8 {
        self.heat.get(pos)
    }

    /// Full heat map, for invariant checks
    #[inline]
    pub fn heat_map(&self) -> &HeatMap {
        &self.heat
    }

    /// An empty cell next to at least one stone
    #[inline]
    pub fn is_candidate(&self, pos: Pos) -> bool {
        self.is_empty(pos) && self.heat.get(pos) > 0
    }

    /// Validate and apply a game move, recording it in the history.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn apply_move(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        let reason = if !self.contains_pos(pos) {
            Some(InvalidMoveReason::OutOfBounds { size: self.size })
        } else if stone == Stone::Empty {
            Some(InvalidMoveReason::NoStone)
        } else if !self.is_empty(pos) {
            Some(InvalidMoveReason::Occupied(self.get(pos)))
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GameError::InvalidMove { pos, reason });
        }

        self.place_stone(pos, stone);
        self.history.push(MoveRecord { pos, stone });
        Ok(())
    }

    /// Take back the most recent move applied with `apply_move`
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.remove_stone(record.pos);
        Some(record)
    }

    /// Place a stone without validation or history (search path).
    ///
    /// The cell must be on the board and empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos}");
        debug_assert!(stone != Stone::Empty);
        let idx = self.index(pos);
        self.cells[idx] = stone;
        self.heat.on_place(pos);
    }

    /// Remove a stone placed with `place_stone`
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        debug_assert!(!self.is_empty(pos), "removing from empty cell {pos}");
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
        self.heat.on_remove(pos);
    }

    /// Clear all stones, heat and history
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.heat.clear();
        self.history.clear();
    }

    /// Moves applied so far, oldest first
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Most recently applied move
    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Centre cell, the opening move on an empty board
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// All positions in row-major order
    #[allow(clippy::cast_possible_truncation)]
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Cells and heat match another board (history ignored)
    pub fn same_position(&self, other: &Board) -> bool {
        self.size == other.size && self.cells == other.cells && self.heat == other.heat
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
