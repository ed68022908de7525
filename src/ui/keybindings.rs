use crate::domain::UiMode;
use crate::ui::styles::{hint_style, Palette};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

fn hints(ui_mode: UiMode) -> Vec<Span<'static>> {
    match ui_mode {
        UiMode::Normal => vec![
            Span::raw(" space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("1/2/3 mode   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter work on   "),
            Span::raw("a add   "),
            Span::raw("x done   "),
            Span::raw("+ count   "),
            Span::raw("d delete   "),
            Span::raw("o settings   "),
            Span::raw("t dark   "),
            Span::raw("? help   "),
            Span::raw("q quit"),
        ],
        UiMode::AddingTask => vec![
            Span::raw(" Tab switch field   "),
            Span::raw("Enter add   "),
            Span::raw("Esc cancel"),
        ],
        UiMode::EditingSettings => vec![
            Span::raw(" Tab next field   "),
            Span::raw("←/→ change   "),
            Span::raw("Enter save   "),
            Span::raw("Esc cancel"),
        ],
        UiMode::Help => vec![Span::raw(" Esc close")],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, p: &Palette, area: Rect) {
    let paragraph = Paragraph::new(Line::from(hints(ui_mode))).style(hint_style(p));
    f.render_widget(paragraph, area);
}
