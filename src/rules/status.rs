//! Game status derivation: outcome evaluation plus the fullness check

use crate::board::{Board, Player};

use super::win::{check_winner, Outcome};

/// Derived state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Derive the status of a board.
///
/// A completed line wins; otherwise a full board is a draw.
pub fn evaluate_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Outcome::Winner(player) => GameStatus::Won(player),
        Outcome::NoWinnerYet if board.is_full() => GameStatus::Draw,
        Outcome::NoWinnerYet => GameStatus::InProgress,
    }
}
