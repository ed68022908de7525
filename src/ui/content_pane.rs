use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, hint_style, title_style, Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the quote or break idea for the running countdown
pub fn render_content_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let (title, lines) = match (app.content.kind(), app.content.current()) {
        (Some(kind), Some(text)) => (
            format!(" {} ", kind.heading()),
            vec![
                Line::raw(""),
                Line::from(Span::styled(text, default_style(p))),
                Line::raw(""),
                Line::from(Span::styled(kind.footer(), hint_style(p))),
            ],
        ),
        _ => (
            " Inspiration ".to_string(),
            vec![
                Line::raw(""),
                Line::from(Span::styled(
                    "Start the timer for a focus quote or a break idea.",
                    hint_style(p),
                )),
            ],
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(p))
                .style(default_style(p))
                .title(Span::styled(title, title_style(p))),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
