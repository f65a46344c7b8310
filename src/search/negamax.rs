//! Depth-limited negamax with alpha-beta pruning
//!
//! The board is mutated in place along the current line and restored on the
//! way back up. Every child move goes through [`PlacedStone`], so the undo
//! happens on every exit path, including a cutoff.
//!
//! # Example
//!
//! ```
//! use gobang::board::{Board, Players, Pos, Stone};
//! use gobang::eval::Jitter;
//! use gobang::search::Searcher;
//!
//! let mut board = Board::default();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(2, 10, Jitter::disabled());
//! let result = searcher.search(&mut board, Players::new(Stone::White));
//! assert!(result.best_move.is_some());
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Players, Pos, Stone};
use crate::eval::{evaluate_board, Jitter, ShapeScore};

use super::candidates::generate;

/// Outcome of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move; `None` only when nothing can be played
    pub best_move: Option<Pos>,
    /// Score of that move from the mover's perspective
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// A stone placed for the duration of one child search.
///
/// Derefs to the board so the recursion can use it directly; dropping it
/// removes the stone and reverts the heat map.
struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> PlacedStone<'a> {
    fn new(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        board.place_stone(pos, stone);
        Self { board, pos }
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Negamax searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    candidate_limit: usize,
    jitter: Jitter,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies ahead and tries at most
    /// `candidate_limit` quiet moves per node.
    #[must_use]
    pub fn new(max_depth: u8, candidate_limit: usize, jitter: Jitter) -> Self {
        Self {
            max_depth,
            candidate_limit,
            jitter,
            nodes: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[inline]
    pub fn candidate_limit(&self) -> usize {
        self.candidate_limit
    }

    /// Replace the score jitter, e.g. to reseed between games
    pub fn set_jitter(&mut self, jitter: Jitter) {
        self.jitter = jitter;
    }

    /// Search for the best move for `players.mine` with a full window.
    ///
    /// The board is borrowed mutably for the duration of the search but is
    /// returned unchanged.
    pub fn search(&mut self, board: &mut Board, players: Players) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.negamax(board, players, ShapeScore::MIN, ShapeScore::MAX, 0);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        players: Players,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        let score = evaluate_board(board, players, &mut self.jitter);
        if depth >= self.max_depth || score.abs() >= ShapeScore::LIVE_FIVE {
            return (score, None);
        }

        let candidates = generate(board, players, self.candidate_limit);
        if candidates.is_empty() {
            return (score, None);
        }

        let mut best_move = None;
        for candidate in candidates {
            #[cfg(debug_assertions)]
            let snapshot = board.clone();

            let child = {
                let mut placed = PlacedStone::new(board, candidate.pos, players.mine);
                -self.negamax(&mut placed, players.swapped(), -beta, -alpha, depth + 1).0
            };

            #[cfg(debug_assertions)]
            debug_assert!(
                board.same_position(&snapshot),
                "board not restored after searching {}",
                candidate.pos
            );

            if child > alpha {
                alpha = child;
                best_move = Some(candidate.pos);
                if alpha >= beta {
                    break;
                }
            }
        }

        (alpha, best_move)
    }
}
