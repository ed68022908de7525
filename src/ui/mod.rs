pub mod content_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use content_pane::render_content_pane;
use header::{render_header, render_mode_tabs};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_help_modal, render_settings_modal};
use ratatui::{
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};
use styles::{default_style, flash_style, Palette};
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::from_settings(&app.settings);
    let p = &palette;

    // Paint the theme background first
    f.render_widget(Block::default().style(default_style(p)), size);

    let layout = create_layout(size);

    render_header(f, app, p, layout.header_area);
    render_mode_tabs(f, app, p, layout.tabs_area);
    render_timer_pane(f, app, p, layout.timer_area);
    render_content_pane(f, app, p, layout.content_area);
    render_list_pane(f, app, p, layout.tasks_area);

    if let Some(flash) = &app.flash {
        let line = Paragraph::new(Span::styled(format!(" {}", flash.message), flash_style(p)));
        f.render_widget(line, layout.flash_area);
    }

    render_keybindings(f, app.ui_mode, p, layout.keybindings_area);

    match app.ui_mode {
        UiMode::AddingTask => render_input_form(f, app, p, size),
        UiMode::EditingSettings => render_settings_modal(f, app, p, size),
        UiMode::Help => render_help_modal(f, p, size),
        UiMode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mode, Settings};
    use crate::notifications::Notifier;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn timer_completed(&mut self, _mode: Mode) {}
    }

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_idle_screen() {
        let mut app = AppState::new(Settings::default(), Box::new(SilentNotifier));
        app.add_task("Write report", 2);

        let screen = draw(&app, 120, 40);
        assert!(screen.contains("25:00"));
        assert!(screen.contains("POMODORO"));
        assert!(screen.contains("Write report"));
        assert!(screen.contains("0 / 2 pomodoros"));
    }

    #[test]
    fn test_render_ascii_task_glyphs() {
        let mut app = AppState::new(Settings::default(), Box::new(SilentNotifier));
        app.use_emoji = false;
        app.add_task("Write report", 2);

        let screen = draw(&app, 120, 40);
        assert!(screen.contains("[o]"));
        assert!(screen.contains("--"));
        assert!(!screen.contains("⭕"));
        assert!(!screen.contains("○"));
    }

    #[test]
    fn test_render_overlays() {
        let mut app = AppState::new(Settings::default(), Box::new(SilentNotifier));

        app.open_settings();
        assert!(draw(&app, 120, 40).contains("Settings"));
        app.cancel_settings_form();

        app.start_add_task();
        assert!(draw(&app, 120, 40).contains("Add Task"));
        app.cancel_task_form();

        app.toggle_help();
        assert!(draw(&app, 120, 40).contains("Every 4th pomodoro"));
    }

    #[test]
    fn test_render_running_and_tiny_terminal() {
        let mut app = AppState::new(Settings::default(), Box::new(SilentNotifier));
        app.start_timer(Instant::now());
        app.tick(Instant::now());
        app.select_mode(Mode::LongBreak);

        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Stay Focused"));
        assert!(screen.contains("Pause the timer"));

        // Must not panic on a cramped terminal
        draw(&app, 20, 5);
    }
}
