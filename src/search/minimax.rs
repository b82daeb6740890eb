//! Exhaustive minimax search
//!
//! The computer (O) maximizes and the human (X) minimizes. Every empty slot is
//! tried in ascending order with no pruning and no caching, so the result is
//! the exact game-theoretic value of the position.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Board;
//! use tictactoe::search::Searcher;
//!
//! let mut board: Board = "OO..X...X".parse().unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search(&mut board, true);
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.score, 10);
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, Player, TOTAL_CELLS};
use crate::rules::{check_winner, Outcome};

/// Score of a position the computer has won
pub const WIN_SCORE: i32 = 10;
/// Score of a position the human has won
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the position is already terminal
    pub best_move: Option<usize>,
    /// Minimax value of the position
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// A mark written into an empty slot for the duration of one branch.
///
/// Dropping the guard empties the slot again, so every exit from the branch
/// restores the board.
struct TrialMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> TrialMove<'a> {
    fn play(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index));
        board.set(index, player.mark());
        Self { board, index }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, Cell::Empty);
    }
}

/// Score a terminal position, or `None` if play continues
#[inline]
fn terminal_score(board: &Board) -> Option<i32> {
    match check_winner(board) {
        Outcome::Winner(Player::Human) => Some(LOSS_SCORE),
        Outcome::Winner(Player::Computer) => Some(WIN_SCORE),
        Outcome::NoWinnerYet if board.is_full() => Some(DRAW_SCORE),
        Outcome::NoWinnerYet => None,
    }
}

/// Minimax searcher with a node counter.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the position to full depth.
    ///
    /// `maximizing` selects the side to move: `true` for the computer, `false`
    /// for the human. The board is used as scratch space and is identical to
    /// its input state when this returns.
    pub fn search(&mut self, board: &mut Board, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, maximizing);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> (i32, Option<usize>) {
        self.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return (score, None);
        }

        let mover = if maximizing {
            Player::Computer
        } else {
            Player::Human
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for index in 0..TOTAL_CELLS {
            if !board.is_empty(index) {
                continue;
            }

            let score = {
                let mut trial = TrialMove::play(board, index, mover);
                self.minimax(&mut *trial, !maximizing).0
            };

            // Strict comparison: the lowest index keeps ties.
            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_move = Some(index);
            }
        }

        (best_score, best_move)
    }
}

/// One-shot search with a fresh [`Searcher`]
pub fn minimax(board: &mut Board, maximizing: bool) -> SearchResult {
    Searcher::new().search(board, maximizing)
}
