use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Restart,
    ToggleTheme,
    PlaceAt(usize), // Digit keys 1-9

    // TUI-local events (handled by the board cursor first)
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Maps a raw crossterm event to a `TuiEvent`. Unbound input maps to `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|digit| TuiEvent::PlaceAt(digit as usize - 1)),
        (_, KeyCode::Char('q') | KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r' | 'R')) => Some(TuiEvent::Restart),
        (_, KeyCode::Char('t' | 'T')) => Some(TuiEvent::ToggleTheme),
        (_, KeyCode::Char(' ') | KeyCode::Enter) => Some(TuiEvent::Select),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::CursorRight),
        _ => None,
    }
}
