//! Game session: the board, whose turn it is and the derived status

use tracing::{info, instrument};

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::engine::{apply_move, AIEngine, MoveResult};
use crate::rules::{evaluate_status, find_winning_line, GameStatus};
use crate::{Error, Result};

/// A single human-vs-computer game.
///
/// Owns the board and is the only place moves are committed. The turn passes
/// to the other side after every accepted move unless that move ended the game.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
    move_history: Vec<(usize, Player)>,
    engine: AIEngine,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        info!(first_player = ?config.first_player, "new game");
        Self {
            config,
            board: Board::new(),
            current_player: config.first_player,
            status: GameStatus::InProgress,
            last_move: None,
            move_history: Vec::with_capacity(9),
            engine: AIEngine::new(),
        }
    }

    /// Clear the board and start over with the same configuration
    pub fn reset(&mut self) {
        info!(first_player = ?self.config.first_player, "game reset");
        self.board = Board::new();
        self.current_player = self.config.first_player;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();
    }

    /// Start over with a different configuration
    pub fn restart_with(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn move_history(&self) -> &[(usize, Player)] {
        &self.move_history
    }

    /// Line to highlight once someone has won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            GameStatus::Won(_) => find_winning_line(&self.board),
            _ => None,
        }
    }

    /// True when the computer should move next
    #[inline]
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current_player == Player::Computer
    }

    /// Play the human's move at `index`
    pub fn play_human(&mut self, index: usize) -> Result<GameStatus> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.current_player != Player::Human {
            return Err(Error::NotYourTurn);
        }
        self.commit(index, Player::Human)
    }

    /// Search for the computer's move and play it
    pub fn play_computer(&mut self) -> Result<MoveResult> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.current_player != Player::Computer {
            return Err(Error::NotYourTurn);
        }
        let result = self.engine.get_move_with_stats(&self.board)?;
        self.commit(result.best_move, Player::Computer)?;
        Ok(result)
    }

    #[instrument(level = "debug", skip(self))]
    fn commit(&mut self, index: usize, player: Player) -> Result<GameStatus> {
        self.board = apply_move(&self.board, index, player)?;
        self.last_move = Some(index);
        self.move_history.push((index, player));
        self.status = evaluate_status(&self.board);

        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Won(winner) => info!(?winner, moves = self.move_count(), "game won"),
            GameStatus::Draw => info!(moves = self.move_count(), "game drawn"),
        }
        Ok(self.status)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::default();
        assert!(session.board().is_board_empty());
        assert_eq!(session.current_player(), Player::Human);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.move_count(), 0);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::default();
        session.play_human(4).unwrap();
        assert_eq!(session.current_player(), Player::Computer);
        assert!(session.is_computer_turn());

        let result = session.play_computer().unwrap();
        assert_eq!(session.last_move(), Some(result.best_move));
        assert_eq!(session.current_player(), Player::Human);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn test_human_cannot_move_out_of_turn() {
        let mut session = GameSession::default();
        session.play_human(0).unwrap();
        assert_eq!(session.play_human(1), Err(Error::NotYourTurn));
    }

    #[test]
    fn test_computer_cannot_move_out_of_turn() {
        let mut session = GameSession::default();
        assert_eq!(session.play_computer(), Err(Error::NotYourTurn));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::default();
        session.play_human(0).unwrap();
        session.play_computer().unwrap();

        assert_eq!(session.play_human(0), Err(Error::Occupied { position: 0 }));
        assert_eq!(session.play_human(9), Err(Error::InvalidPosition { position: 9 }));
        assert_eq!(session.current_player(), Player::Human);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn test_computer_first() {
        let config = GameConfig::default().with_first_player(Player::Computer);
        let mut session = GameSession::new(config);
        assert!(session.is_computer_turn());

        let result = session.play_computer().unwrap();
        assert_eq!(result.best_move, 0);
        assert_eq!(session.current_player(), Player::Human);
    }

    /// Human always takes the lowest free slot; returns the final status.
    fn play_out_first_free(session: &mut GameSession) -> GameStatus {
        while !session.is_over() {
            let index = session.board().empty_positions().next().unwrap();
            session.play_human(index).unwrap();
            if !session.is_over() {
                session.play_computer().unwrap();
            }
        }
        session.status()
    }

    #[test]
    fn test_game_over_freezes_turn_and_reset_clears() {
        let mut session = GameSession::default();
        let status = play_out_first_free(&mut session);

        // X0 O4 X1 O2 X3 O6
        assert_eq!(status, GameStatus::Won(Player::Computer));
        assert_eq!(session.move_count(), 6);
        assert_eq!(session.current_player(), Player::Computer);
        assert_eq!(session.play_human(5), Err(Error::GameOver));
        assert_eq!(session.play_computer(), Err(Error::GameOver));

        session.reset();
        assert!(session.board().is_board_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::Human);
        assert_eq!(session.last_move(), None);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_winning_line_reported() {
        let mut session = GameSession::default();
        session.play_human(0).unwrap();
        session.play_computer().unwrap();
        assert_eq!(session.winning_line(), None);

        play_out_first_free(&mut session);
        assert_eq!(session.winning_line(), Some([2, 4, 6]));
        assert_eq!(session.last_move(), Some(6));
    }

    #[test]
    fn test_restart_with_new_config() {
        let mut session = GameSession::default();
        session.play_human(4).unwrap();
        session.restart_with(GameConfig::default().with_first_player(Player::Computer));
        assert!(session.board().is_board_empty());
        assert_eq!(session.current_player(), Player::Computer);
    }
}
