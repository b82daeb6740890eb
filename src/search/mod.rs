//! Search module for the tic-tac-toe AI
//!
//! Contains the full-depth minimax search used to pick the computer's move.

pub mod minimax;

pub use minimax::{minimax, SearchResult, Searcher, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
