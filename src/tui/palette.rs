//! Colors per theme. Primary and accent match the original game's brand
//! colors; background and text flip with the theme.

use ratatui::style::{Color, Modifier, Style};

use crate::core::board::Mark;
use crate::core::theme::Theme;

const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xd2);
const ACCENT: Color = Color::Rgb(0xff, 0x57, 0x22);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xff, 0xff, 0xff),
                foreground: Color::Rgb(0x28, 0x2c, 0x34),
                muted: Color::Rgb(0x6c, 0x75, 0x7d),
                border: Color::Rgb(0xce, 0xd4, 0xda),
                primary: PRIMARY,
                accent: ACCENT,
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x1a, 0x1a, 0x1a),
                foreground: Color::Rgb(0xff, 0xff, 0xff),
                muted: Color::Rgb(0xa0, 0xa0, 0xa0),
                border: Color::Rgb(0x44, 0x44, 0x44),
                primary: PRIMARY,
                accent: ACCENT,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    /// X in primary, O in accent.
    pub fn mark(&self, mark: Mark) -> Style {
        let color = match mark {
            Mark::X => self.primary,
            Mark::O => self.accent,
        };
        self.base().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ_only_in_neutrals() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.foreground, dark.foreground);
        assert_eq!(light.primary, dark.primary);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn test_mark_colors() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(palette.mark(Mark::X).fg, Some(PRIMARY));
        assert_eq!(palette.mark(Mark::O).fg, Some(ACCENT));
    }
}
