//! # TitleBar Component
//!
//! One-line header: the game title on the left and the theme toggle button
//! on the right. The button caption names the mode it switches to, so the
//! bar reads `Tic Tac Toe ........ [ Dark mode ]` in light mode.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const TITLE: &str = "Tic Tac Toe";

pub struct TitleBar {
    pub theme: Theme,
    pub palette: Palette,
    /// Where the toggle button goes; computed by the screen layout.
    pub button_area: Rect,
}

impl TitleBar {
    pub fn new(theme: Theme, palette: Palette, button_area: Rect) -> Self {
        Self {
            theme,
            palette,
            button_area,
        }
    }

    pub fn button_caption(theme: Theme) -> String {
        format!("[ {} ]", theme.toggle_label())
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(
            TITLE,
            self.palette
                .base()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(title).style(self.palette.base()), area);

        let button = Paragraph::new(Self::button_caption(self.theme))
            .style(self.palette.muted())
            .alignment(Alignment::Right);
        frame.render_widget(button, self.button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(theme: Theme) -> String {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let caption_width = TitleBar::button_caption(theme).len() as u16;
        let button_area = Rect::new(40 - caption_width, 0, caption_width, 1);

        let mut title_bar = TitleBar::new(theme, Palette::for_theme(theme), button_area);
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_light_theme_offers_dark_mode() {
        let text = rendered_text(Theme::Light);
        assert!(text.starts_with("Tic Tac Toe"));
        assert!(text.ends_with("[ Dark mode ]"));
    }

    #[test]
    fn test_dark_theme_offers_light_mode() {
        let text = rendered_text(Theme::Dark);
        assert!(text.ends_with("[ Light mode ]"));
    }
}
