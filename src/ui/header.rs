use crate::app::AppState;
use crate::domain::Mode;
use crate::ui::styles::{border_style, default_style, hint_style, title_style, Palette};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Header text: app name, date, projected finish and completed pomodoros
fn header_spans(app: &AppState, p: &Palette) -> Vec<Span<'static>> {
    let date = Local::now().format("%a %b %d");
    let mut spans = vec![
        Span::styled(" 🍅 Pomoterm ", title_style(p)),
        Span::styled(format!(" {} ", date), default_style(p)),
    ];

    if let Some(finish) = app.projected_finish() {
        spans.push(Span::styled(
            format!(" · done at {} ", finish.format("%H:%M")),
            default_style(p),
        ));
    }

    spans.push(Span::styled(
        format!(" · {} pomodoros this session ", app.session.completed_focus_count()),
        hint_style(p),
    ));
    spans
}

/// Render the one-line header
pub fn render_header(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let paragraph = Paragraph::new(Line::from(header_spans(app, p))).style(default_style(p));
    f.render_widget(paragraph, area);
}

/// Render the mode selector. Dimmed while a countdown runs since
/// switching is refused then.
pub fn render_mode_tabs(f: &mut Frame, app: &AppState, p: &Palette, area: Rect) {
    let titles: Vec<Line> = Mode::all()
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{} {} {}", i + 1, mode.symbol(), mode.label())))
        .collect();

    let highlight = if app.timer.is_running() {
        border_style(p)
    } else {
        title_style(p)
    };

    let tabs = Tabs::new(titles)
        .select(app.timer.mode().index())
        .style(hint_style(p))
        .highlight_style(highlight)
        .divider(" │ ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(p))
                .style(default_style(p)),
        );

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;
    use crate::notifications::Notifier;
    use std::time::Instant;

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn timer_completed(&mut self, _mode: Mode) {}
    }

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_shows_finish_only_while_running() {
        let mut app = AppState::new(Settings::default(), Box::new(SilentNotifier));
        let p = Palette::from_settings(&app.settings);

        let idle = text_of(&header_spans(&app, &p));
        assert!(!idle.contains("done at"));
        assert!(idle.contains("0 pomodoros"));

        app.start_timer(Instant::now());
        let running = text_of(&header_spans(&app, &p));
        assert!(running.contains("done at"));
    }
}
