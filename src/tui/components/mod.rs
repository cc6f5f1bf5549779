//! # TUI Components
//!
//! All UI pieces of the game screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: game title and the theme toggle button
//! - `StatusLine`: whose turn it is, the winner, or a draw
//! - `BoardView`: the 3x3 grid with winning-line highlight
//! - `ControlBar`: restart button and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `BoardCursor`: keyboard selection on the grid, emits `BoardEvent`
//!
//! Components receive everything they draw as props. None of them reads
//! `App` directly; `ui::draw_ui` wires them up.

pub mod board_view;
pub mod control_bar;
pub mod status_line;
pub mod title_bar;

pub use board_view::{BoardCursor, BoardEvent, BoardView};
pub use control_bar::ControlBar;
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
