//! Game configuration

use std::time::Duration;

use tracing::warn;

use crate::board::Player;

/// Environment variable overriding the computer's move delay
pub const AI_DELAY_ENV: &str = "TICTACTOE_AI_DELAY_MS";

/// Default pause before the computer replies
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

/// Settings for a game session.
///
/// The delay only paces the front end; it never affects which move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side that opens the game
    pub first_player: Player,
    /// Pause before the computer's move is shown
    pub ai_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::Human,
            ai_delay: DEFAULT_AI_DELAY,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    #[must_use]
    pub fn with_ai_delay(mut self, ai_delay: Duration) -> Self {
        self.ai_delay = ai_delay;
        self
    }

    /// Defaults, with the delay taken from `TICTACTOE_AI_DELAY_MS` when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(AI_DELAY_ENV) {
            Ok(value) => config.with_delay_str(&value),
            Err(_) => config,
        }
    }

    /// Apply a delay in milliseconds; unparseable values keep the current delay
    fn with_delay_str(self, value: &str) -> Self {
        match value.trim().parse::<u64>() {
            Ok(ms) => self.with_ai_delay(Duration::from_millis(ms)),
            Err(_) => {
                warn!(value, "ignoring invalid {AI_DELAY_ENV}");
                self
            }
        }
    }
}
