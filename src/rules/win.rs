//! Win condition checking
//!
//! A game ends when a stone completes five (or more) in a row, or when the
//! board fills up with no five, which is a draw. Five detection goes through
//! the same shape classifier the evaluator uses.

use crate::board::{Board, Players, Pos, Stone};
use crate::eval::{classify, Shape, ShapeCounts, DIRECTIONS};

/// Check whether the stone just placed at `pos` by `players.mine` completes
/// a five. Only the four lines through `pos` are examined.
#[must_use]
pub fn is_game_over(board: &Board, pos: Pos, players: Players) -> bool {
    let mut counts = ShapeCounts::new();
    for dir in DIRECTIONS {
        classify(board, pos, players, dir, &mut counts, None);
        if counts.has(Shape::LiveFive) {
            return true;
        }
    }
    false
}

/// The five stones forming the winning line through `pos`, if any.
///
/// For an overline the five closest to the line's start are returned.
#[must_use]
pub fn winning_line(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let stone = board.get(pos);
    if stone == Stone::Empty {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        let same = |step: i32| {
            let (r, c) = pos.offset(dr, dc, step);
            board.cell(r, c) == Some(stone)
        };

        let mut start = 0;
        while same(start - 1) {
            start -= 1;
        }
        let mut end = 0;
        while same(end + 1) {
            end += 1;
        }
        if end - start + 1 < 5 {
            continue;
        }

        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            let (r, c) = pos.offset(dr, dc, start + i as i32);
            *cell = board_pos(r, c);
        }
        return Some(line);
    }
    None
}

/// Find any finished five on the board: the winner and its line.
#[must_use]
pub fn find_winner(board: &Board) -> Option<(Stone, [Pos; 5])> {
    board
        .positions()
        .filter(|&pos| !board.is_empty(pos))
        .find_map(|pos| winning_line(board, pos).map(|line| (board.get(pos), line)))
}

/// The board is full and nobody has five
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
fn board_pos(row: i32, col: i32) -> Pos {
    Pos::new(row as u8, col as u8)
}
