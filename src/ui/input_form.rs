use crate::app::AppState;
use crate::domain::task::MAX_ESTIMATED_UNITS;
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

/// Render the input form for adding tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Name field
        lines.push(Line::raw(""));
        let name_label = if form.editing_field == 0 {
            "Task name: (editing)"
        } else {
            "Task name:"
        };
        lines.push(Line::raw(name_label));

        let name_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.name, modal_title_style(p)),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style(p)) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(name_line);
        lines.push(Line::raw(""));

        // Estimate field
        let estimate_label = if form.editing_field == 1 {
            "Estimated pomodoros: (editing)"
        } else {
            "Estimated pomodoros:"
        };
        lines.push(Line::raw(estimate_label));

        let estimate_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.estimate, modal_title_style(p)),
            if form.editing_field == 1 {
                Span::styled("█", modal_title_style(p)) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(estimate_line);
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("(Estimate between 1 and "),
            Span::styled(MAX_ESTIMATED_UNITS.to_string(), modal_title_style(p)),
            Span::raw("; blank means 1)"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style(p)))
                    .style(modal_bg_style(p)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
