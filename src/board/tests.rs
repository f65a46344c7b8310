use super::*;
use crate::error::{GameError, InvalidMoveReason};
use pretty_assertions::assert_eq;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_players_swap() {
    let players = Players::new(Stone::Black);
    assert_eq!(players.mine, Stone::Black);
    assert_eq!(players.theirs, Stone::White);

    let swapped = players.swapped();
    assert_eq!(swapped, Players::new(Stone::White));
    assert_eq!(swapped.swapped(), players);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(Board::default().size(), 15);
    assert_eq!(Board::default().center(), Pos::new(7, 7));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_contains() {
    let board = Board::new(15);
    assert!(board.contains(0, 0));
    assert!(board.contains(14, 14));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, 15));
    assert_eq!(board.cell(15, 3), None);
    assert_eq!(board.cell(3, 3), Some(Stone::Empty));
}

#[test]
fn test_apply_move_records_history() {
    let mut board = Board::default();
    board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
    board.apply_move(Pos::new(7, 8), Stone::White).unwrap();

    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.history().len(), 2);
    assert_eq!(
        board.last_move(),
        Some(MoveRecord { pos: Pos::new(7, 8), stone: Stone::White })
    );
}

#[test]
fn test_apply_move_rejects_occupied() {
    let mut board = Board::default();
    board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
    let snapshot = board.clone();

    let err = board.apply_move(Pos::new(7, 7), Stone::White).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            pos: Pos::new(7, 7),
            reason: InvalidMoveReason::Occupied(Stone::Black),
        }
    );
    assert!(board.same_position(&snapshot));
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_apply_move_rejects_out_of_bounds() {
    let mut board = Board::default();
    let err = board.apply_move(Pos::new(15, 2), Stone::Black).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            pos: Pos::new(15, 2),
            reason: InvalidMoveReason::OutOfBounds { size: 15 },
        }
    );
    assert!(board.is_board_empty());
}

#[test]
fn test_apply_move_rejects_empty_stone() {
    let mut board = Board::default();
    assert!(board.apply_move(Pos::new(2, 2), Stone::Empty).is_err());
    assert!(board.history().is_empty());
}

#[test]
fn test_apply_undo_symmetry() {
    let mut board = Board::default();
    for (pos, stone) in [
        (Pos::new(7, 7), Stone::Black),
        (Pos::new(8, 8), Stone::White),
        (Pos::new(6, 8), Stone::Black),
    ] {
        board.apply_move(pos, stone).unwrap();
    }

    let positions: Vec<Pos> = board.positions().filter(|&p| board.is_empty(p)).collect();
    for pos in positions {
        let before = board.clone();
        board.apply_move(pos, Stone::White).unwrap();
        let undone = board.undo_move();

        assert_eq!(undone, Some(MoveRecord { pos, stone: Stone::White }));
        assert!(board.same_position(&before), "state differs after undo at {pos}");
        assert_eq!(board.heat_map(), before.heat_map());
    }
}

#[test]
fn test_heat_monotonic_on_place() {
    let mut board = Board::default();
    board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
    let before = board.clone();

    board.apply_move(Pos::new(7, 8), Stone::White).unwrap();
    for pos in board.positions() {
        if board.is_empty(pos) {
            assert!(board.heat(pos) >= before.heat(pos), "heat decreased at {pos}");
        }
    }
    assert_eq!(board.heat(Pos::new(6, 9)), before.heat(Pos::new(6, 9)) + 1);

    board.undo_move();
    assert_eq!(board.heat_map(), before.heat_map());
}

#[test]
fn test_candidates_follow_stones() {
    let mut board = Board::default();
    assert!(board.positions().all(|p| !board.is_candidate(p)));

    board.apply_move(Pos::new(0, 0), Stone::Black).unwrap();
    let candidates: Vec<Pos> = board.positions().filter(|&p| board.is_candidate(p)).collect();
    assert_eq!(candidates, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Board::default();
    board.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
    board.reset();

    assert!(board.is_board_empty());
    assert!(board.history().is_empty());
    assert!(board.same_position(&Board::default()));
}

#[test]
fn test_is_full_small_board() {
    let mut board = Board::new(3);
    let mut stone = Stone::Black;
    let positions: Vec<Pos> = board.positions().collect();
    for pos in positions {
        assert!(!board.is_full());
        board.apply_move(pos, stone).unwrap();
        stone = stone.opponent();
    }
    assert!(board.is_full());
}
