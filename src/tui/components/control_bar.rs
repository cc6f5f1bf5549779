//! # ControlBar Component
//!
//! The always-available restart button, centered, above a muted line of key
//! hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const RESTART_CAPTION: &str = "[ Restart Game ]";
pub const KEY_HINTS: &str = "click or 1-9 / arrows+enter: play · r: restart · t: theme · q: quit";

pub struct ControlBar {
    pub palette: Palette,
    pub button_area: Rect,
    pub hints_area: Rect,
}

impl ControlBar {
    pub fn new(palette: Palette, button_area: Rect, hints_area: Rect) -> Self {
        Self {
            palette,
            button_area,
            hints_area,
        }
    }
}

impl Component for ControlBar {
    fn render(&mut self, frame: &mut Frame, _area: Rect) {
        let button = Paragraph::new(RESTART_CAPTION)
            .style(
                self.palette
                    .base()
                    .fg(self.palette.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(button, self.button_area);

        let hints = Paragraph::new(KEY_HINTS)
            .style(self.palette.muted())
            .alignment(Alignment::Center);
        frame.render_widget(hints, self.hints_area);
    }
}
