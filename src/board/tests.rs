use super::*;
use crate::Error;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Human.opponent(), Player::Computer);
    assert_eq!(Player::Computer.opponent(), Player::Human);
}

#[test]
fn test_player_marks() {
    assert_eq!(Player::Human.mark(), Cell::X);
    assert_eq!(Player::Computer.mark(), Cell::O);
    assert_eq!(Cell::X.owner(), Some(Player::Human));
    assert_eq!(Cell::O.owner(), Some(Player::Computer));
    assert_eq!(Cell::Empty.owner(), None);
}

#[test]
fn test_index_conversion() {
    assert_eq!(to_row_col(0), (0, 0));
    assert_eq!(to_row_col(4), (1, 1));
    assert_eq!(to_row_col(8), (2, 2));
    assert_eq!(from_row_col(2, 0), 6);
    assert_eq!(from_row_col(0, 2), 2);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.empty_positions().count(), 9);
}

#[test]
fn test_place_mark() {
    let mut board = Board::new();
    board.place(4, Player::Human).unwrap();
    assert_eq!(board.get(4), Cell::X);
    assert!(!board.is_empty(4));
    assert_eq!(board.mark_count(), 1);
    assert!(!board.empty_positions().any(|i| i == 4));
}

#[test]
fn test_place_rejects_occupied_slot() {
    let mut board = Board::new();
    board.place(0, Player::Human).unwrap();
    let before = board;

    let err = board.place(0, Player::Computer).unwrap_err();
    assert!(matches!(err, Error::Occupied { position: 0 }));
    assert_eq!(board, before);
}

#[test]
fn test_place_rejects_out_of_range() {
    let mut board = Board::new();
    let err = board.place(9, Player::Human).unwrap_err();
    assert!(matches!(err, Error::InvalidPosition { position: 9 }));
    assert!(board.is_board_empty());
}

#[test]
fn test_parse_and_display() {
    let board: Board = "XO.|.X.|..O".parse().unwrap();
    assert_eq!(board.get(0), Cell::X);
    assert_eq!(board.get(1), Cell::O);
    assert_eq!(board.get(2), Cell::Empty);
    assert_eq!(board.get(8), Cell::O);
    assert_eq!(board.to_string(), "XO.\n.X.\n..O");

    let reparsed: Board = board.to_string().parse().unwrap();
    assert_eq!(reparsed, board);
}

#[test]
fn test_parse_spaces_as_empty_when_nine_wide() {
    let board: Board = "X   O    ".parse().unwrap();
    assert_eq!(board.get(0), Cell::X);
    assert_eq!(board.get(4), Cell::O);
    assert_eq!(board.mark_count(), 2);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        "XO".parse::<Board>(),
        Err(Error::InvalidBoardLength { expected: 9, got: 2 })
    ));
    assert!(matches!(
        "XO.Z.....".parse::<Board>(),
        Err(Error::InvalidCellCharacter {
            character: 'Z',
            position: 3
        })
    ));
}

#[test]
fn test_full_board() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
}
