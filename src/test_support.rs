//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::game::GameState;
use crate::core::state::App;
use crate::core::theme::Theme;

/// Creates a fresh light-themed App.
pub fn test_app() -> App {
    App::new(Theme::Light)
}

/// Plays `moves` from a fresh game, panicking if any move is rejected.
pub fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        if let Err(reason) = game.apply_move(index) {
            panic!("move {index} rejected: {reason}");
        }
    }
    game
}
