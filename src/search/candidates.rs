//! Candidate move generation
//!
//! Only empty cells next to a stone are considered. Forcing moves come first
//! and are never truncated; quiet moves are ranked and capped.

use crate::board::{Board, Pos, Players};
use crate::eval::{evaluate_point, ShapeScore};

/// A move worth searching, with its ranking score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub score: i32,
    pub pos: Pos,
}

/// Candidates split by urgency
#[derive(Debug, Default)]
struct Buckets {
    fives: Vec<Candidate>,
    my_fours: Vec<Candidate>,
    their_fours: Vec<Candidate>,
    my_sleep_fours: Vec<Candidate>,
    rest: Vec<Candidate>,
}

impl Buckets {
    fn push(&mut self, pos: Pos, mine: i32, theirs: i32) {
        let best = mine.max(theirs);
        if best >= ShapeScore::LIVE_FIVE {
            self.fives.push(Candidate { score: best, pos });
        } else if mine >= ShapeScore::LIVE_FOUR {
            self.my_fours.push(Candidate { score: mine, pos });
        } else if theirs >= ShapeScore::LIVE_FOUR {
            self.their_fours.push(Candidate { score: theirs, pos });
        } else if mine >= ShapeScore::SLEEP_FOUR {
            self.my_sleep_fours.push(Candidate { score: mine, pos });
        } else {
            // Opponent sleep fours are ranked with the quiet moves
            self.rest.push(Candidate { score: best, pos });
        }
    }

    /// Search order. Only the quiet moves are capped at `limit`.
    fn into_moves(self, limit: usize) -> Vec<Candidate> {
        if !self.fives.is_empty() {
            return self.fives;
        }
        if !self.my_fours.is_empty() {
            return self.my_fours;
        }

        let mut forcing = self.my_sleep_fours;
        forcing.sort_by(|a, b| b.score.cmp(&a.score));
        if !self.their_fours.is_empty() {
            let mut moves = self.their_fours;
            moves.extend(forcing);
            return moves;
        }

        let mut rest = self.rest;
        rest.sort_by(|a, b| b.score.cmp(&a.score));
        rest.truncate(limit);
        forcing.extend(rest);
        forcing
    }
}

/// Generate the moves to search for `players.mine`, in search order.
///
/// Tiers, first non-empty wins:
/// 1. completes five for either side (win or must-block)
/// 2. mover makes a live four
/// 3. opponent would make a live four, plus mover sleep fours
/// 4. mover sleep fours, then everything else best first, at most `limit`
///    of the latter
pub fn generate(board: &Board, players: Players, limit: usize) -> Vec<Candidate> {
    let mut buckets = Buckets::default();
    for pos in board.positions() {
        if board.is_candidate(pos) {
            let (mine, theirs) = evaluate_point(board, pos, players);
            buckets.push(pos, mine, theirs);
        }
    }
    buckets.into_moves(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use pretty_assertions::assert_eq;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::default();
        for &(r, c, stone) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_candidates() {
        let board = Board::default();
        assert!(generate(&board, Players::new(Stone::Black), 10).is_empty());
    }

    #[test]
    fn test_single_stone_neighbours() {
        let board = board_with(&[(7, 7, Stone::Black)]);
        let moves = generate(&board, Players::new(Stone::White), 10);
        assert_eq!(moves.len(), 8);
        for c in &moves {
            let dr = (i32::from(c.pos.row) - 7).abs();
            let dc = (i32::from(c.pos.col) - 7).abs();
            assert!(dr <= 1 && dc <= 1 && (dr, dc) != (0, 0));
        }
    }

    #[test]
    fn test_breadth_limit() {
        let board = board_with(&[
            (7, 7, Stone::Black),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
            (5, 5, Stone::White),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 4);
        assert_eq!(moves.len(), 4);
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_winning_cell_only() {
        // Black can complete five at (7, 7); several quiet cells exist
        let board = board_with(&[
            (7, 3, Stone::Black),
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 2, Stone::White),
            (3, 3, Stone::White),
            (2, 10, Stone::White),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 10);
        assert_eq!(
            moves,
            vec![Candidate { score: ShapeScore::LIVE_FIVE, pos: Pos::new(7, 7) }]
        );
    }

    #[test]
    fn test_must_block_opponent_five() {
        let board = board_with(&[
            (7, 3, Stone::White),
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 2, Stone::Black),
            (9, 9, Stone::Black),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 10);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].pos, Pos::new(7, 7));
    }

    #[test]
    fn test_live_four_continuation_only() {
        // _BBB_ with room: both ends make a live four
        let board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (3, 3, Stone::White),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 10);
        let mut cells: Vec<Pos> = moves.iter().map(|c| c.pos).collect();
        cells.sort();
        assert_eq!(cells, vec![Pos::new(7, 4), Pos::new(7, 8)]);
        assert!(moves.iter().all(|c| c.score == ShapeScore::LIVE_FOUR));
    }

    #[test]
    fn test_open_three_must_be_answered() {
        // White threatens a live four; Black's own blocked three is not urgent
        let board = board_with(&[
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (2, 1, Stone::White),
            (2, 2, Stone::Black),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 10);
        let cells: Vec<Pos> = moves.iter().map(|c| c.pos).collect();
        assert_eq!(cells, vec![Pos::new(7, 4), Pos::new(7, 8)]);
    }

    #[test]
    fn test_quiet_moves_sorted_best_first() {
        let board = board_with(&[
            (2, 1, Stone::White),
            (2, 2, Stone::Black),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
        ]);
        let moves = generate(&board, Players::new(Stone::Black), 10);
        assert_eq!(moves.len(), 10);
        // Extending to a blocked four ranks like a live three
        assert_eq!(moves[0], Candidate { score: ShapeScore::LIVE_THREE, pos: Pos::new(2, 5) });
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// `OMMM` with the candidate closing a four both across and down
    fn double_sleep_four_at(board: &mut Board, r: u8, c: u8) {
        board.place_stone(Pos::new(r, c - 4), Stone::White);
        board.place_stone(Pos::new(r - 4, c), Stone::White);
        for k in 1..=3 {
            board.place_stone(Pos::new(r, c - k), Stone::Black);
            board.place_stone(Pos::new(r - k, c), Stone::Black);
        }
    }

    #[test]
    fn test_sleep_fours_survive_breadth_limit() {
        let mut board = Board::default();
        double_sleep_four_at(&mut board, 6, 6);
        double_sleep_four_at(&mut board, 13, 13);

        let moves = generate(&board, Players::new(Stone::Black), 1);
        let forcing: Vec<Candidate> = moves
            .iter()
            .copied()
            .filter(|c| c.score >= ShapeScore::SLEEP_FOUR)
            .collect();
        assert_eq!(
            forcing,
            vec![
                Candidate { score: 2 * ShapeScore::SLEEP_FOUR, pos: Pos::new(6, 6) },
                Candidate { score: 2 * ShapeScore::SLEEP_FOUR, pos: Pos::new(13, 13) },
            ]
        );
        assert_eq!(&moves[..2], &forcing[..]);
        assert_eq!(moves.len(), 3);
    }

    fn quiet(score: i32, r: u8) -> Candidate {
        Candidate { score, pos: Pos::new(r, 0) }
    }

    #[test]
    fn test_block_comes_with_own_sleep_fours() {
        let block = Candidate { score: ShapeScore::LIVE_FOUR - 1, pos: Pos::new(1, 1) };
        let counter = Candidate { score: 1100, pos: Pos::new(2, 2) };
        let buckets = Buckets {
            their_fours: vec![block],
            my_sleep_fours: vec![counter],
            rest: vec![quiet(100, 3), quiet(8, 4)],
            ..Buckets::default()
        };
        assert_eq!(buckets.into_moves(10), vec![block, counter]);
    }

    #[test]
    fn test_only_quiet_moves_are_capped() {
        let buckets = Buckets {
            my_sleep_fours: vec![
                Candidate { score: 1100, pos: Pos::new(5, 5) },
                Candidate { score: 2000, pos: Pos::new(6, 6) },
            ],
            // An opponent double four ranks above the mover's 4-3 but stays quiet
            rest: vec![quiet(8, 3), quiet(2000, 4), quiet(100, 5)],
            ..Buckets::default()
        };
        assert_eq!(
            buckets.into_moves(1),
            vec![
                Candidate { score: 2000, pos: Pos::new(6, 6) },
                Candidate { score: 1100, pos: Pos::new(5, 5) },
                quiet(2000, 4),
            ]
        );
    }
}
