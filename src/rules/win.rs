//! Win condition checking for tic-tac-toe
//!
//! A player wins by owning all three slots of one of the eight lines
//! (three rows, three columns, two diagonals).

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board, in evaluation order
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Result of scanning the board for a completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoWinnerYet,
    Winner(Player),
}

impl Outcome {
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::NoWinnerYet => None,
        }
    }
}

/// Find the first completed line, if any
#[inline]
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}

/// Check for a winner
///
/// Returns `Outcome::Winner` for the owner of the first completed line.
/// A full board without a line is still `NoWinnerYet`; draws are detected
/// by [`evaluate_status`](super::evaluate_status).
#[inline]
pub fn check_winner(board: &Board) -> Outcome {
    find_winning_line(board)
        .and_then(|[a, _, _]| board.get(a).owner())
        .map_or(Outcome::NoWinnerYet, Outcome::Winner)
}

/// Check if the given player owns a completed line
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == mark))
}
