//! Game rules for tic-tac-toe
//!
//! - Win detection over the eight fixed lines
//! - Status derivation (in progress, won, draw)

pub mod status;
pub mod win;

// Re-exports for convenient access
pub use status::{evaluate_status, GameStatus};
pub use win::{check_winner, find_winning_line, has_won, Outcome, LINES};
