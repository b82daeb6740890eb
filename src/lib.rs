//! Tic-tac-toe engine with exhaustive minimax
//!
//! A human (X) plays against the computer (O). The computer searches the whole
//! remaining game tree and never loses.
//!
//! # Architecture
//!
//! - [`board`]: nine-slot board, marks and players
//! - [`rules`]: win detection and status derivation
//! - [`search`]: full-depth minimax
//! - [`engine`]: the operations the front end calls
//! - [`session`]: a running game (board, turn, status)
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameConfig, GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! session.play_human(4).unwrap();
//!
//! let reply = session.play_computer().unwrap();
//! println!("Computer plays {}", reply.best_move);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! assert_eq!(session.current_player(), Player::Human);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, BOARD_SIZE, TOTAL_CELLS};
pub use config::GameConfig;
pub use engine::{apply_move, compute_computer_move, AIEngine, MoveResult};
pub use error::{Error, Result};
pub use rules::{check_winner, evaluate_status, GameStatus, Outcome};
pub use session::GameSession;
