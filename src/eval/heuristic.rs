//! Heuristic evaluation of single points and whole boards
//!
//! - [`evaluate_point`] scores a hypothetical placement for both sides, used
//!   to rank candidate moves.
//! - [`evaluate_board`] scores a position for the side to move, used at
//!   search nodes.

use crate::board::{Board, Pos, Players, Stone};

use super::jitter::Jitter;
use super::patterns::{board_score, point_score};
use super::shape::{classify, ShapeCounts, VisitedGrid, DIRECTIONS};

/// Score a placement at `pos` for both sides: `(mine, theirs)`.
///
/// `mine` is what the mover gains by playing here, `theirs` what the opponent
/// would gain, i.e. the value of blocking. The board is not mutated.
#[must_use]
pub fn evaluate_point(board: &Board, pos: Pos, players: Players) -> (i32, i32) {
    let mut mine = ShapeCounts::new();
    let mut theirs = ShapeCounts::new();
    for dir in DIRECTIONS {
        classify(board, pos, players, dir, &mut mine, None);
        classify(board, pos, players.swapped(), dir, &mut theirs, None);
    }
    (point_score(&mine), point_score(&theirs))
}

/// Shape counts for both sides over the whole board: `(mine, theirs)`.
///
/// Each occupied cell anchors one classification per direction unless an
/// earlier classification already accounted for it.
#[must_use]
pub fn count_shapes(board: &Board, players: Players) -> (ShapeCounts, ShapeCounts) {
    let mut visited: [VisitedGrid; 4] = std::array::from_fn(|_| VisitedGrid::new(board.size()));
    let mut mine = ShapeCounts::new();
    let mut theirs = ShapeCounts::new();

    for pos in board.positions() {
        let stone = board.get(pos);
        if stone == Stone::Empty {
            continue;
        }
        for (dir, grid) in DIRECTIONS.into_iter().zip(visited.iter_mut()) {
            if grid.is_visited(pos) {
                continue;
            }
            if stone == players.mine {
                classify(board, pos, players, dir, &mut mine, Some(grid));
            } else {
                classify(board, pos, players.swapped(), dir, &mut theirs, Some(grid));
            }
        }
    }

    (mine, theirs)
}

/// Unperturbed board score for `players.mine`: mine minus theirs.
#[must_use]
pub fn board_value(board: &Board, players: Players) -> i32 {
    let (mine, theirs) = count_shapes(board, players);
    let (my_score, their_score) = board_score(&mine, &theirs);
    my_score - their_score
}

/// Board score for `players.mine` with tie-breaking jitter applied.
///
/// Positive values favour the mover. A finished five scores exactly
/// `±ShapeScore::LIVE_FIVE` and is never perturbed.
#[must_use]
pub fn evaluate_board(board: &Board, players: Players, jitter: &mut Jitter) -> i32 {
    jitter.apply(board_value(board, players))
}
