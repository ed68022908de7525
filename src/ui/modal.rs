use crate::app::{
    AppState, SettingsFormState, FIELD_CUSTOM_COLOR, FIELD_DARK_MODE, FIELD_FOCUS, FIELD_LONG_BREAK,
    FIELD_SHORT_BREAK, FIELD_THEME,
};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, Palette},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// One "label: value" row, with a cursor or arrows on the focused field
fn field_line(label: &str, value: String, focused: bool, cycles: bool, p: &Palette) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let mut spans = vec![
        Span::raw(format!("{}{:<18}", marker, label)),
    ];

    if focused && cycles {
        spans.push(Span::styled(format!("◀ {} ▶", value), modal_title_style(p)));
    } else if focused {
        spans.push(Span::styled(value, modal_title_style(p)));
        spans.push(Span::styled("█", modal_title_style(p))); // Cursor
    } else {
        spans.push(Span::raw(value));
    }

    Line::from(spans)
}

fn settings_lines(form: &SettingsFormState, p: &Palette) -> Vec<Line<'static>> {
    let focus = |field: usize| form.editing_field == field;
    let dark = if form.dark_mode { "on" } else { "off" };

    vec![
        Line::raw(""),
        field_line("Focus (min)", form.focus.clone(), focus(FIELD_FOCUS), false, p),
        field_line("Short break (min)", form.short_break.clone(), focus(FIELD_SHORT_BREAK), false, p),
        field_line("Long break (min)", form.long_break.clone(), focus(FIELD_LONG_BREAK), false, p),
        field_line("Theme", form.theme.name().to_string(), focus(FIELD_THEME), true, p),
        field_line("Custom colour", form.custom_color.clone(), focus(FIELD_CUSTOM_COLOR), false, p),
        field_line("Dark mode", dark.to_string(), focus(FIELD_DARK_MODE), true, p),
        Line::raw(""),
        Line::raw("  Focus 1-60 · short break 1-30 · long break 1-60"),
        Line::raw("  A valid custom colour switches the theme to Custom"),
        Line::raw(""),
        Line::raw("  Tab/↑↓ field  ·  ←/→ change  ·  Enter save  ·  Esc cancel"),
    ]
}

/// Render the settings form
pub fn render_settings_modal(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let paragraph = Paragraph::new(settings_lines(form, p))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⚙ Settings ", modal_title_style(p)))
                    .style(modal_bg_style(p)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the help overlay
pub fn render_help_modal(f: &mut Frame, p: &Palette, area: Rect) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), modal_title_style(p)),
            Span::raw(what),
        ])
    };

    let lines = vec![
        key("space/s", "Start or pause the timer"),
        key("r", "Reset the current countdown"),
        key("1 2 3", "Pomodoro / short break / long break (while stopped)"),
        key("↑/↓", "Select a task"),
        key("Enter", "Work on the selected task (starts a focus session)"),
        key("a", "Add a task"),
        key("x", "Mark the selected task done or not done"),
        key("+", "Count a pomodoro on the selected task"),
        key("d/Del", "Delete the selected task"),
        key("o", "Settings"),
        key("t", "Toggle dark mode"),
        key("q", "Quit"),
        Line::raw(""),
        Line::raw("  Every 4th pomodoro earns a long break."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ? Help ", modal_title_style(p)))
                .style(modal_bg_style(p)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;

    #[test]
    fn test_settings_lines_mark_focused_field() {
        let p = Palette::from_settings(&Settings::default());
        let mut app_form = SettingsFormState {
            focus: "25".to_string(),
            short_break: "5".to_string(),
            long_break: "15".to_string(),
            theme: crate::domain::Theme::Forest,
            custom_color: "#ff6b6b".to_string(),
            dark_mode: false,
            editing_field: FIELD_THEME,
        };

        let rendered: Vec<String> = settings_lines(&app_form, &p)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(rendered.iter().any(|l| l.starts_with("▸ Theme") && l.contains("◀ Forest ▶")));

        app_form.editing_field = FIELD_FOCUS;
        let rendered: Vec<String> = settings_lines(&app_form, &p)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(rendered.iter().any(|l| l.starts_with("▸ Focus") && l.ends_with("25█")));
    }
}
