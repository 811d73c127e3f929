//! Board tests - collision asymmetry and sweep behavior

use blockfall::core::{Board, Shape};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_collision_left_edge() {
    let board = Board::new();
    for kind in [PieceKind::O, PieceKind::T, PieceKind::I] {
        let shape = Shape::of(kind);
        // Far enough left that every occupied cell maps below column 0
        assert!(board.collides(&shape, -(shape.size() as i8), 5), "{:?}", kind);
    }
}

#[test]
fn test_collision_right_edge() {
    let board = Board::new();
    for kind in [PieceKind::O, PieceKind::T, PieceKind::I] {
        let shape = Shape::of(kind);
        assert!(board.collides(&shape, BOARD_WIDTH as i8, 5), "{:?}", kind);
    }
}

#[test]
fn test_collision_below_bottom() {
    let board = Board::new();
    let shape = Shape::of(PieceKind::O);
    assert!(board.collides(&shape, 4, BOARD_HEIGHT as i8 - 1));
    assert!(board.collides(&shape, 4, BOARD_HEIGHT as i8));
}

#[test]
fn test_no_collision_above_top() {
    let board = Board::new();
    for kind in [PieceKind::O, PieceKind::T, PieceKind::I] {
        let shape = Shape::of(kind);
        // Entirely above row 0, horizontally in range: never a collision
        assert!(!board.collides(&shape, 3, -(shape.size() as i8)), "{:?}", kind);
    }
}

#[test]
fn test_collision_with_settled_stack() {
    let mut board = Board::new();
    board.set(4, 19, Some(PieceKind::Z));

    let shape = Shape::of(PieceKind::O);
    assert!(board.collides(&shape, 4, 18));
    assert!(board.collides(&shape, 3, 18));
    assert!(!board.collides(&shape, 5, 18));
}

#[test]
fn test_merge_then_sweep_roundtrip() {
    let mut board = Board::new();
    let shape = Shape::of(PieceKind::O);

    // Complete the bottom row with a final O
    for x in 0..BOARD_WIDTH as i8 {
        if !(4..6).contains(&x) {
            board.set(x, 18, Some(PieceKind::J));
            board.set(x, 19, Some(PieceKind::J));
        }
    }
    board.merge(&shape, 4, 18, PieceKind::O);

    assert_eq!(board.sweep(), 2);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_sweep_keeps_height_and_order() {
    let mut board = Board::new();
    fill_row(&mut board, 12);
    fill_row(&mut board, 17);
    board.set(2, 11, Some(PieceKind::S));
    board.set(7, 16, Some(PieceKind::T));

    assert_eq!(board.sweep(), 2);

    // Height unchanged, markers shifted down by the clears below them
    assert_eq!(board.cells().len(), (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize));
    assert_eq!(board.get(2, 13), Some(Some(PieceKind::S)));
    assert_eq!(board.get(7, 17), Some(Some(PieceKind::T)));

    for y in 0..BOARD_HEIGHT as usize {
        assert!(!board.is_row_full(y));
    }
}

#[test]
fn test_sweep_counts_stacked_full_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.sweep(), 4);
}

#[test]
fn test_sweep_empty_board_is_noop() {
    let mut board = Board::new();
    assert_eq!(board.sweep(), 0);
    assert!(board.cells().iter().all(|c| c.is_none()));
}
