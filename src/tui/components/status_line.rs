//! # StatusLine Component
//!
//! Centered status text. The emphasis color follows the game: the next
//! player's mark color while playing, accent for a winner, plain bold for a
//! draw.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::board::{Mark, Outcome};
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct StatusLine {
    pub text: String,
    pub outcome: Outcome,
    pub next_player: Mark,
    pub palette: Palette,
}

impl StatusLine {
    pub fn new(text: String, outcome: Outcome, next_player: Mark, palette: Palette) -> Self {
        Self {
            text,
            outcome,
            next_player,
            palette,
        }
    }

    fn style(&self) -> Style {
        match self.outcome {
            Outcome::InProgress => self.palette.mark(self.next_player),
            Outcome::Win { .. } => self.palette.highlight(),
            Outcome::Draw => self.palette.base().add_modifier(Modifier::BOLD),
        }
    }
}

impl Component for StatusLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text.as_str())
            .style(self.style())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::LINES;
    use crate::core::theme::Theme;

    #[test]
    fn test_style_follows_outcome() {
        let palette = Palette::for_theme(Theme::Light);
        let playing = StatusLine::new(String::new(), Outcome::InProgress, Mark::O, palette);
        assert_eq!(playing.style().fg, Some(palette.accent));

        let playing_x = StatusLine::new(String::new(), Outcome::InProgress, Mark::X, palette);
        assert_eq!(playing_x.style().fg, Some(palette.primary));

        let won = StatusLine::new(
            String::new(),
            Outcome::Win {
                winner: Mark::X,
                line: LINES[0],
            },
            Mark::O,
            palette,
        );
        assert_eq!(won.style().fg, Some(palette.accent));

        let draw = StatusLine::new(String::new(), Outcome::Draw, Mark::O, palette);
        assert_eq!(draw.style().fg, Some(palette.foreground));
    }
}
