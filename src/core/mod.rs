//! # Core Game Logic
//!
//! The rules and the application state. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board + evaluate()   │
//!                    │  • GameState (rules)    │
//!                    │  • App (state)          │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Board`, `Line`, `Outcome` and the pure `evaluate()`
//! - [`game`]: `GameState`, the move/reset state machine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`theme`]: light/dark mode
//! - [`config`]: config file, env and CLI layering

pub mod action;
pub mod board;
pub mod config;
pub mod game;
pub mod state;
pub mod theme;
