//! # Actions
//!
//! Everything that can happen in the game becomes an `Action`.
//! Player clicks cell 4? That's `Action::PlaceMark(4)`.
//! Player hits the restart button? That's `Action::Restart`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop.
//! No I/O here. Terminal handling happens in the TUI adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::board::Outcome;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark on a cell (0-8, row-major).
    PlaceMark(usize),
    Restart,
    ToggleTheme,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Dispatching {:?}", action);
    match action {
        Action::PlaceMark(index) => {
            let player = app.game.next_player();
            match app.game.apply_move(index) {
                Ok(Outcome::Win { winner, line }) => {
                    info!("{} wins on {:?}", winner, line.indices());
                }
                Ok(Outcome::Draw) => info!("Game ended in a draw"),
                Ok(Outcome::InProgress) => debug!("{} took cell {}", player, index),
                // Invalid clicks are silently ignored
                Err(reason) => debug!("Ignoring move: {}", reason),
            }
            Effect::None
        }
        Action::Restart => {
            info!("Restarting after {} moves", app.game.move_count());
            app.game.reset();
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            debug!("Theme is now {}", app.theme.label());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
