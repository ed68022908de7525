use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_form_mode(app, key),
        UiMode::EditingSettings => handle_settings_mode(app, key),
        UiMode::Help => handle_help_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let now = Instant::now();

    match key.code {
        // Timer controls
        KeyCode::Char(' ') | KeyCode::Char('s') => app.toggle_timer(now),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(mode) = Mode::from_key(c) {
                app.select_mode(mode);
            }
        }

        // Task list
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter => app.start_selected_task(now),
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected_done(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_selected(),

        // Appearance and help
        KeyCode::Char('o') | KeyCode::Char('O') => app.open_settings(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }

    Ok(false)
}

/// Handle keys in the add-task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        // Switch between name and estimate
        KeyCode::Tab | KeyCode::BackTab => app.task_form_toggle_field(),
        KeyCode::Backspace => app.task_form_backspace(),
        KeyCode::Char(c) => app.task_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the settings form
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.cancel_settings_form(),
        KeyCode::Tab | KeyCode::Down => app.settings_form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.settings_form_prev_field(),
        KeyCode::Left => app.settings_form_cycle(false),
        KeyCode::Right => app.settings_form_cycle(true),
        KeyCode::Backspace => app.settings_form_backspace(),
        KeyCode::Char(c) => app.settings_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Any of these keys closes the help overlay
fn handle_help_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}
