//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One synchronous loop: draw, wait for input, turn each event into at most
//! one `Action`, run it through `update()`, repeat. Nothing runs in the
//! background, so the loop only redraws after an event or a resize.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardCursor, BoardEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{HitTarget, ScreenLayout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core game logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub cursor: BoardCursor,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable, keyboard only: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Exiting after {} moves", app.game.move_count());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain everything pending before next draw
        let mut next_event = Some(first_event);
        while let Some(event) = next_event {
            let frame_area = terminal.get_frame().area();
            if let Some(action) = action_for_event(app, tui, &event, frame_area)
                && update(app, action) == Effect::Quit
            {
                return Ok(());
            }
            next_event = poll_event_immediate()?;
        }
    }
}

/// Maps one input event to the action it triggers, updating presentation
/// state (the cursor) along the way.
pub fn action_for_event(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Restart => Some(Action::Restart),
        TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
        // Resize just needs a redraw
        TuiEvent::Resize => None,
        TuiEvent::MouseClick(column, row) => {
            let hit = ScreenLayout::new(frame_area, app.theme).hit_test(*column, *row);
            debug!("Click at ({}, {}) hit {:?}", column, row, hit);
            match hit? {
                HitTarget::Cell(index) => {
                    tui.cursor.jump_to(index);
                    Some(Action::PlaceMark(index))
                }
                HitTarget::Restart => Some(Action::Restart),
                HitTarget::ThemeToggle => Some(Action::ToggleTheme),
            }
        }
        _ => match tui.cursor.handle_event(event)? {
            BoardEvent::Select(index) => Some(Action::PlaceMark(index)),
        },
    }
}
