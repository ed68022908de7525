use crate::domain::Settings;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one frame, derived from the theme and dark mode setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub surface: Color,
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        let (r, g, b) = settings.accent_rgb();
        let accent = Color::Rgb(r, g, b);

        if settings.dark_mode {
            Self {
                accent,
                fg: Color::Rgb(243, 244, 246),
                bg: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(156, 163, 175),
                surface: Color::Rgb(31, 41, 55),
            }
        } else {
            Self {
                accent,
                fg: Color::Rgb(31, 41, 55),
                bg: Color::Rgb(249, 250, 251),
                muted: Color::Rgb(107, 114, 128),
                surface: Color::Rgb(229, 231, 235),
            }
        }
    }
}

/// Default text style
pub fn default_style(p: &Palette) -> Style {
    Style::default().fg(p.fg).bg(p.bg)
}

/// Selected row highlight style
pub fn selected_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.bg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(p: &Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Large countdown digits
pub fn clock_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Countdown progress gauge
pub fn gauge_style(p: &Palette) -> Style {
    Style::default().fg(p.accent).bg(p.surface)
}

/// Active task badge
pub fn active_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.muted)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Modal background style
pub fn modal_bg_style(p: &Palette) -> Style {
    Style::default().bg(p.surface).fg(p.fg)
}

/// Modal title style
pub fn modal_title_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style(p: &Palette) -> Style {
    Style::default().fg(p.muted).bg(p.bg)
}

/// Flash message style
pub fn flash_style(p: &Palette) -> Style {
    Style::default()
        .fg(Color::Yellow)
        .bg(p.bg)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[test]
    fn test_palette_follows_theme() {
        let mut settings = Settings::default();
        assert_eq!(Palette::from_settings(&settings).accent, Color::Rgb(0xef, 0x44, 0x44));

        settings.theme = Theme::Ocean;
        assert_eq!(Palette::from_settings(&settings).accent, Color::Rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_dark_mode_swaps_background() {
        let mut settings = Settings::default();
        let light = Palette::from_settings(&settings);
        settings.dark_mode = true;
        let dark = Palette::from_settings(&settings);

        assert_eq!(light.accent, dark.accent);
        assert_ne!(light.bg, dark.bg);
    }
}
