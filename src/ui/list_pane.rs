use crate::app::AppState;
use crate::domain::{task_glyph, unit_track, units_label, Task};
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, hint_style, selected_style, title_style,
    Palette,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let done = app.tasks.iter().filter(|t| t.done).count();
    let title = format!(" Tasks ({}/{} done) ", done, app.tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(p))
        .style(default_style(p))
        .title(Span::styled(title, title_style(p)));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(" No tasks yet. Press a to add one.", hint_style(p))),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let active_id = app.session.active_task_id();
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_active = active_id == Some(task.id);
            let line = create_task_line(task, is_active, app.use_emoji, p);
            let style = if idx == app.selected_index {
                selected_style(p)
            } else if task.done {
                done_style(p)
            } else {
                default_style(p)
            };

            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Create a single line for a task
/// Format: [🍅] Write proposal  ●●○  2 / 3 pomodoros  ◀ active
fn create_task_line(task: &Task, is_active: bool, use_emoji: bool, p: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!("[{}] ", task_glyph(task, use_emoji))),
        Span::raw(task.name.clone()),
        Span::raw("  "),
        Span::raw(unit_track(task, use_emoji)),
        Span::raw(format!("  {}", units_label(task))),
    ];

    if is_active {
        spans.push(Span::styled("  ◀ active", active_style(p)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;

    #[test]
    fn test_create_task_line() {
        let p = Palette::from_settings(&Settings::default());
        let mut task = Task::new("Test task", 3);
        task.record_unit();

        let line = create_task_line(&task, false, false, &p);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[+] Test task  #--  1 / 3 pomodoros");
    }

    #[test]
    fn test_create_active_task_line() {
        let p = Palette::from_settings(&Settings::default());
        let task = Task::new("Focus", 1);

        let line = create_task_line(&task, true, true, &p);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Focus"));
        assert!(line_str.contains("active"));
    }
}
