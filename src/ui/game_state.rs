//! Game state management for the tic-tac-toe GUI

use std::time::{Duration, Instant};

use tracing::{error, warn};

use crate::board::Player;
use crate::config::GameConfig;
use crate::engine::MoveResult;
use crate::rules::GameStatus;
use crate::session::GameSession;
use crate::{Error, Result};

/// Computer move pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// The computer's move is shown once `due` has passed
    Waiting { due: Instant },
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            ai_state: AiState::Idle,
            last_ai_result: None,
            message: None,
        }
    }

    /// Restart with the current configuration
    pub fn reset(&mut self) {
        self.session.reset();
        self.clear_transient();
    }

    /// Restart with the given side opening
    pub fn new_game(&mut self, first_player: Player) {
        let config = self.session.config().with_first_player(first_player);
        self.session.restart_with(config);
        self.clear_transient();
    }

    fn clear_transient(&mut self) {
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.session.is_over() && self.session.current_player() == Player::Human
    }

    /// Check if the computer's move is pending
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Waiting { .. })
    }

    /// Attempt to place the human's mark at `index`
    pub fn try_place_mark(&mut self, index: usize) -> Result<()> {
        if self.is_ai_thinking() {
            return Err(Error::NotYourTurn);
        }
        match self.session.play_human(index) {
            Ok(_) => {
                self.message = None;
                Ok(())
            }
            Err(err) => {
                warn!(index, %err, "move rejected");
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Arm the delay before the computer's move
    pub fn schedule_ai_move(&mut self, now: Instant) {
        if self.session.is_computer_turn() && !self.is_ai_thinking() {
            self.ai_state = AiState::Waiting {
                due: now + self.session.config().ai_delay,
            };
        }
    }

    /// Play the computer's move once its delay has passed
    pub fn poll_ai(&mut self, now: Instant) {
        let AiState::Waiting { due } = self.ai_state else {
            return;
        };
        if now < due {
            return;
        }

        self.ai_state = AiState::Idle;
        match self.session.play_computer() {
            Ok(result) => self.last_ai_result = Some(result),
            Err(err) => {
                error!(%err, "computer could not move");
                self.message = Some(format!("Computer could not move: {err}"));
            }
        }
    }

    /// Time left before the pending computer move
    pub fn ai_time_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Waiting { due } => Some(due.saturating_duration_since(now)),
            AiState::Idle => None,
        }
    }

    /// Status line shown to the player
    pub fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::Won(player) => format!("{} wins!", player.mark().to_char()),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress if self.session.current_player() == Player::Human => {
                "Your turn (X)".to_string()
            }
            GameStatus::InProgress => "Computer thinking...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_state() -> GameState {
        GameState::new(GameConfig::default().with_ai_delay(Duration::ZERO))
    }

    #[test]
    fn test_human_move_then_computer_reply() {
        let mut state = instant_state();
        state.try_place_mark(4).unwrap();
        assert_eq!(state.status_text(), "Computer thinking...");

        let now = Instant::now();
        state.schedule_ai_move(now);
        assert!(state.is_ai_thinking());
        state.poll_ai(now);

        assert!(!state.is_ai_thinking());
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());
        assert_eq!(state.status_text(), "Your turn (X)");
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut state = GameState::new(GameConfig::default().with_ai_delay(Duration::from_millis(500)));
        state.try_place_mark(0).unwrap();

        let now = Instant::now();
        state.schedule_ai_move(now);
        state.poll_ai(now + Duration::from_millis(100));
        assert!(state.is_ai_thinking());
        assert_eq!(state.session.move_count(), 1);
        assert_eq!(
            state.ai_time_remaining(now + Duration::from_millis(100)),
            Some(Duration::from_millis(400))
        );

        state.poll_ai(now + Duration::from_millis(500));
        assert!(!state.is_ai_thinking());
        assert_eq!(state.session.move_count(), 2);
    }

    #[test]
    fn test_clicks_ignored_while_computer_pending() {
        let mut state = instant_state();
        state.try_place_mark(0).unwrap();
        state.schedule_ai_move(Instant::now());
        assert_eq!(state.try_place_mark(1), Err(Error::NotYourTurn));
        assert_eq!(state.session.move_count(), 1);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut state = instant_state();
        state.try_place_mark(0).unwrap();
        let now = Instant::now();
        state.schedule_ai_move(now);
        state.poll_ai(now);

        assert!(state.try_place_mark(0).is_err());
        assert!(state.message.is_some());
    }

    #[test]
    fn test_new_game_with_computer_first() {
        let mut state = instant_state();
        state.try_place_mark(4).unwrap();
        state.new_game(Player::Computer);

        assert_eq!(state.session.move_count(), 0);
        assert!(!state.is_human_turn());

        let now = Instant::now();
        state.schedule_ai_move(now);
        state.poll_ai(now);
        assert_eq!(state.session.last_move(), Some(0));
    }

    #[test]
    fn test_status_text_after_game() {
        let mut state = instant_state();
        // X0 O4 X1 O2 X3 O6
        for index in [0, 1, 3] {
            state.try_place_mark(index).unwrap();
            let now = Instant::now();
            state.schedule_ai_move(now);
            state.poll_ai(now);
        }
        assert_eq!(state.status_text(), "O wins!");

        state.reset();
        assert_eq!(state.status_text(), "Your turn (X)");
        assert!(state.last_ai_result.is_none());
    }
}
