//! Core game operations used by the presentation layer
//!
//! The front end talks to the core only through this module:
//!
//! 1. [`apply_move`]: place a mark on a board
//! 2. [`evaluate_status`]: derive in progress / won / draw
//! 3. [`compute_computer_move`]: full-depth minimax for the computer (O)
//!
//! [`AIEngine`] wraps the search with timing and node statistics for display.
//!
//! # Example
//!
//! ```
//! use tictactoe::{apply_move, compute_computer_move, evaluate_status, Board, GameStatus, Player};
//!
//! let board = Board::new();
//! let board = apply_move(&board, 4, Player::Human).unwrap();
//! assert_eq!(evaluate_status(&board), GameStatus::InProgress);
//!
//! let reply = compute_computer_move(&board).unwrap();
//! let board = apply_move(&board, reply, Player::Computer).unwrap();
//! assert_eq!(board.mark_count(), 2);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Player};
use crate::rules::evaluate_status;
use crate::search::{SearchResult, Searcher};
use crate::{Error, Result};

/// Result of a computer move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Slot the computer should play
    pub best_move: usize,
    /// Minimax value after the move (+10 win, 0 draw, -10 loss)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Build from a search result; `None` when the search found no move
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Option<Self> {
        result.best_move.map(|best_move| Self {
            best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        })
    }
}

/// Place `player`'s mark at `index` and return the new board.
///
/// Fails fast instead of producing a wrong board: the index must be in range,
/// the slot empty and the game still in progress.
#[instrument(level = "debug", skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board> {
    if evaluate_status(board).is_over() {
        return Err(Error::GameOver);
    }
    let mut next = *board;
    next.place(index, player)?;
    Ok(next)
}

/// Slot the computer should play on this board.
pub fn compute_computer_move(board: &Board) -> Result<usize> {
    AIEngine::new().get_move(board)
}

/// AI engine for the computer player.
///
/// Always searches from the computer's side (maximizing). The caller's board
/// is never touched; the search runs on a private copy.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best move for the computer.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    pub fn get_move(&mut self, board: &Board) -> Result<usize> {
        self.get_move_with_stats(board).map(|result| result.best_move)
    }

    /// Get the best move with score, node count and elapsed time.
    ///
    /// Returns `Error::GameOver` on a board that is already won or full.
    #[instrument(level = "debug", skip_all, fields(marks = board.mark_count()))]
    pub fn get_move_with_stats(&mut self, board: &Board) -> Result<MoveResult> {
        if evaluate_status(board).is_over() {
            return Err(Error::GameOver);
        }

        let start = Instant::now();
        let mut scratch = *board;
        let result = self.searcher.search(&mut scratch, true);
        debug_assert_eq!(&scratch, board);

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, time_ms).ok_or(Error::GameOver)
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}
