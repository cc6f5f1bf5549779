//! # Application State
//!
//! Everything the app knows, in one owned value. No globals: the TUI holds
//! the `App` and hands it to `update()` and the renderer.
//!
//! ```text
//! App
//! ├── game: GameState   // board, turn, outcome, history
//! └── theme: Theme      // light/dark, session only
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::game::GameState;
use crate::core::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct App {
    pub game: GameState,
    pub theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameState::new(),
            theme,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.theme)
    }

    /// Status line text: the winner, a draw, or whose turn it is.
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.game.winner() {
            format!("Winner: {winner}")
        } else if self.game.is_draw() {
            "Draw!".to_string()
        } else {
            format!("Current Player: {}", self.game.next_player())
        }
    }
}
