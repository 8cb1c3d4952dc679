//! Board tests - grid access, merging and row clearing

use tetrogrid::core::{shape_of, ActivePiece, Board};
use tetrogrid::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_clear());

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);

    // Outside cells are never empty and never writable
    assert!(!board.is_empty(-1, 5));
    assert!(!board.is_empty(5, BOARD_HEIGHT as i8));
    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(board.is_clear());
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(!board.is_empty(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_merge_paints_piece_color() {
    let mut board = Board::new();
    let piece = ActivePiece::at(shape_of(PieceKind::S), 2, 18);
    board.merge(&piece);

    for (x, y) in [(3, 18), (4, 18), (2, 19), (3, 19)] {
        assert_eq!(board.get(x, y), Some(Some(Color::Green)));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row_except(19, Color::Red, &[]);
    board.fill_row_except(18, Color::Blue, &[0]);
    board.fill_row_except(17, Color::Red, &[]);
    board.set(9, 16, Some(Color::Yellow));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Row 18 drops to 19, row 16 drops to 18
    assert_eq!(board.get(0, 19), Some(None));
    assert_eq!(board.get(1, 19), Some(Some(Color::Blue)));
    assert_eq!(board.get(9, 18), Some(Some(Color::Yellow)));
    for y in 0..18 {
        assert!(board.row(y).unwrap().iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        board.fill_row_except(y, Color::Orange, &[]);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert!(board.is_clear());
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::new();
    board.fill_row_except(19, Color::Cyan, &[3]);
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_row_out_of_range_is_none() {
    let board = Board::new();
    assert_eq!(board.row(BOARD_HEIGHT as usize - 1).map(|r| r.len()), Some(10));
    assert!(board.row(BOARD_HEIGHT as usize).is_none());
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}
