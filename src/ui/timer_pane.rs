use crate::app::AppState;
use crate::domain::{format_clock, progress_fraction, unit_track, units_label};
use crate::engine::TimerState;
use crate::ui::styles::{
    active_style, border_style, clock_style, default_style, gauge_style, hint_style, title_style,
    Palette,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Status under the clock
fn status_text(state: &TimerState) -> &'static str {
    if state.is_finished() {
        "Time's up!"
    } else if state.running {
        "remaining"
    } else if state.remaining_secs == state.total_secs {
        "ready · space to start"
    } else {
        "paused · space to resume"
    }
}

/// Render the countdown card for the current mode
pub fn render_timer_pane(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let state = app.timer.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(p))
        .style(default_style(p))
        .title(Span::styled(
            format!(" {} {} ", state.mode.symbol(), state.mode.title()),
            title_style(p),
        ))
        .title_alignment(Alignment::Center);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Card title
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Status
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Active task
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    let card_title = Paragraph::new(state.mode.card_title())
        .style(hint_style(p))
        .alignment(Alignment::Center);
    f.render_widget(card_title, chunks[0]);

    let clock = Paragraph::new(format_clock(state.remaining_secs))
        .style(clock_style(p))
        .alignment(Alignment::Center);
    f.render_widget(clock, chunks[1]);

    let status = Paragraph::new(status_text(state))
        .style(hint_style(p))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    let fraction = progress_fraction(state.total_secs, state.remaining_secs);
    let gauge = Gauge::default()
        .gauge_style(gauge_style(p))
        .ratio(fraction.clamp(0.0, 1.0))
        .label(format!("{:.0}%", fraction * 100.0))
        .use_unicode(true);
    f.render_widget(gauge, chunks[3]);

    let task_line = match app.active_task() {
        Some(task) => Line::from(vec![
            Span::styled("Working on: ", hint_style(p)),
            Span::styled(task.name.clone(), active_style(p)),
            Span::raw("  "),
            Span::styled(unit_track(task, app.use_emoji), title_style(p)),
            Span::raw("  "),
            Span::styled(
                format!("{} · {:.0}%", units_label(task), task.progress_ratio() * 100.0),
                hint_style(p),
            ),
        ]),
        None => Line::from(Span::styled(
            "No active task · select one and press Enter",
            hint_style(p),
        )),
    };
    f.render_widget(Paragraph::new(task_line).alignment(Alignment::Center), chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;

    fn state(total: u32, remaining: u32, running: bool) -> TimerState {
        TimerState {
            mode: Mode::Focus,
            total_secs: total,
            remaining_secs: remaining,
            running,
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&state(60, 0, false)), "Time's up!");
        assert_eq!(status_text(&state(60, 30, true)), "remaining");
        assert!(status_text(&state(60, 60, false)).starts_with("ready"));
        assert!(status_text(&state(60, 30, false)).starts_with("paused"));
    }
}
