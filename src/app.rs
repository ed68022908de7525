use crate::content::{ContentKind, ContentRotator};
use crate::domain::{parse_estimate, parse_minutes, Mode, Settings, Task, TaskId, TaskList, Theme, UiMode};
use crate::engine::{SessionController, TimerEngine, TimerEvent};
use crate::notifications::Notifier;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// How long a flash message stays visible
pub const FLASH_TTL: Duration = Duration::from_secs(4);

/// Number of fields in the settings form
pub const SETTINGS_FIELDS: usize = 6;

pub const FIELD_FOCUS: usize = 0;
pub const FIELD_SHORT_BREAK: usize = 1;
pub const FIELD_LONG_BREAK: usize = 2;
pub const FIELD_THEME: usize = 3;
pub const FIELD_CUSTOM_COLOR: usize = 4;
pub const FIELD_DARK_MODE: usize = 5;

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub name: String,
    pub estimate: String,
    pub editing_field: usize, // 0 = name, 1 = estimated pomodoros
}

/// Settings form state. Minute fields stay raw text until submit.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub focus: String,
    pub short_break: String,
    pub long_break: String,
    pub theme: Theme,
    pub custom_color: String,
    pub dark_mode: bool,
    pub editing_field: usize,
}

impl SettingsFormState {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            focus: settings.focus_mins.to_string(),
            short_break: settings.short_break_mins.to_string(),
            long_break: settings.long_break_mins.to_string(),
            theme: settings.theme,
            custom_color: settings.custom_color.clone(),
            dark_mode: settings.dark_mode,
            editing_field: FIELD_FOCUS,
        }
    }

    fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.editing_field {
            FIELD_FOCUS => Some(&mut self.focus),
            FIELD_SHORT_BREAK => Some(&mut self.short_break),
            FIELD_LONG_BREAK => Some(&mut self.long_break),
            FIELD_CUSTOM_COLOR => Some(&mut self.custom_color),
            _ => None,
        }
    }
}

/// Short-lived status line message
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    pub shown_at: Instant,
}

/// Main application state
pub struct AppState {
    pub settings: Settings,
    pub timer: TimerEngine,
    pub session: SessionController,
    pub tasks: TaskList,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub task_form: Option<TaskFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub content: ContentRotator,
    pub flash: Option<Flash>,
    pub use_emoji: bool,
    notifier: Box<dyn Notifier>,
}

impl AppState {
    pub fn new(settings: Settings, notifier: Box<dyn Notifier>) -> Self {
        let now = Instant::now();
        let timer = TimerEngine::new(Mode::Focus, settings.duration_secs(Mode::Focus));

        Self {
            settings,
            timer,
            session: SessionController::new(),
            tasks: TaskList::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            task_form: None,
            settings_form: None,
            content: ContentRotator::new(now),
            flash: None,
            use_emoji: true,
            notifier,
        }
    }

    /// The task the session is tracking, looked up in the task list
    pub fn active_task(&self) -> Option<&Task> {
        self.session.active_task_id().and_then(|id| self.tasks.get(id))
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.at(self.selected_index)
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Wall-clock time the running countdown will reach zero
    pub fn projected_finish(&self) -> Option<DateTime<Local>> {
        if !self.timer.is_running() {
            return None;
        }
        Some(Local::now() + chrono::Duration::seconds(self.timer.seconds_left() as i64))
    }

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    // --- Timer commands -------------------------------------------------

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause_timer();
        } else {
            self.start_timer(now);
        }
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.notifier.silence();
        if !self.timer.start(now) {
            self.set_flash("Time's up! Press r to reset the timer.");
        }
    }

    pub fn pause_timer(&mut self) {
        self.notifier.silence();
        self.timer.pause();
    }

    pub fn reset_timer(&mut self) {
        self.notifier.silence();
        self.timer.reset();
    }

    /// Manual mode change from the selector. Refused while running.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.timer.is_running() {
            self.set_flash("Pause the timer before switching modes.");
            return;
        }
        if mode != self.timer.mode() {
            self.configure_timer(mode);
        }
    }

    fn configure_timer(&mut self, mode: Mode) {
        self.notifier.silence();
        self.timer.configure(mode, self.settings.duration_secs(mode));
    }

    /// Advance the countdown to `now` and react to a completion
    pub fn tick(&mut self, now: Instant) {
        if let Some(flash) = &self.flash {
            if now.saturating_duration_since(flash.shown_at) >= FLASH_TTL {
                self.flash = None;
            }
        }

        if let Some(TimerEvent::Completed(mode)) = self.timer.advance(now) {
            self.handle_completion(mode);
        }

        let visible = self
            .timer
            .is_running()
            .then(|| ContentKind::for_mode(self.timer.mode()));
        self.content.sync(visible, now, &mut rand::rng());
    }

    /// Pick the next mode, load its duration (stopped) and ring the cue
    pub fn handle_completion(&mut self, completed: Mode) {
        let next = self.session.on_completed(completed, &mut self.tasks);
        self.timer.configure(next, self.settings.duration_secs(next));
        self.notifier.timer_completed(completed);

        let message = match (completed, next) {
            (Mode::Focus, Mode::LongBreak) => "Pomodoro complete! You earned a long break.",
            (Mode::Focus, _) => "Pomodoro complete! Time for a short break.",
            _ => "Break over. Ready to focus?",
        };
        self.set_flash(message);
    }

    // --- Task commands --------------------------------------------------

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    /// Make the selected task active, load a fresh focus countdown and start it
    pub fn start_selected_task(&mut self, now: Instant) {
        let Some((id, done)) = self.selected_task().map(|t| (t.id, t.done)) else {
            return;
        };
        if done {
            self.set_flash("That task is already done.");
            return;
        }
        if self.session.active_task_id() == Some(id) {
            self.set_flash("That task is already active.");
            return;
        }

        let mode = self.session.select_task(id);
        self.configure_timer(mode);
        self.timer.start(now);
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, name: &str, estimated_units: u32) -> Option<TaskId> {
        let id = self.tasks.add(name, estimated_units)?;
        tracing::info!(%id, name = name.trim(), estimated_units, "task added");
        Some(id)
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(task) = self.tasks.delete(id) {
                tracing::info!(%id, name = %task.name, "task deleted");
            }
            self.session.on_task_deleted(id);
            self.clamp_selection();
        }
    }

    pub fn toggle_selected_done(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.toggle_done(id);
        }
    }

    /// Manual "+1 pomodoro" on the selected task
    pub fn increment_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if !self.tasks.increment(id) {
                self.set_flash("Nothing left to count on that task.");
            }
        }
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState {
            name: String::new(),
            estimate: "1".to_string(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Toggle between name and estimate fields
    pub fn task_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to the task form (current field)
    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => form.name.push(c),
                1 if c.is_ascii_digit() => form.estimate.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in the task form (current field)
    pub fn task_form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => {
                    form.name.pop();
                }
                1 => {
                    form.estimate.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit the task form. A blank name keeps the form open.
    pub fn submit_task_form(&mut self) {
        let Some(form) = &self.task_form else {
            return;
        };
        if form.name.trim().is_empty() {
            self.set_flash("Task name can't be blank.");
            return;
        }

        let name = form.name.clone();
        let estimate = parse_estimate(&form.estimate);
        self.task_form = None;
        self.ui_mode = UiMode::Normal;

        if self.add_task(&name, estimate).is_some() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Settings -------------------------------------------------------

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
    }

    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsFormState::from_settings(&self.settings));
        self.ui_mode = UiMode::EditingSettings;
    }

    pub fn settings_form_next_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % SETTINGS_FIELDS;
        }
    }

    pub fn settings_form_prev_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + SETTINGS_FIELDS - 1) % SETTINGS_FIELDS;
        }
    }

    /// Left/Right on the theme and dark mode fields
    pub fn settings_form_cycle(&mut self, forward: bool) {
        if let Some(form) = &mut self.settings_form {
            match form.editing_field {
                FIELD_THEME => {
                    form.theme = if forward { form.theme.next() } else { form.theme.prev() };
                }
                FIELD_DARK_MODE => form.dark_mode = !form.dark_mode,
                _ => {}
            }
        }
    }

    pub fn settings_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.settings_form {
            if form.editing_field == FIELD_DARK_MODE && c == ' ' {
                form.dark_mode = !form.dark_mode;
                return;
            }
            let is_color = form.editing_field == FIELD_CUSTOM_COLOR;
            if let Some(field) = form.text_field_mut() {
                let accepted = if is_color {
                    c == '#' || c.is_ascii_hexdigit()
                } else {
                    c.is_ascii_digit()
                };
                if accepted {
                    field.push(c);
                }
            }
        }
    }

    pub fn settings_form_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            if let Some(field) = form.text_field_mut() {
                field.pop();
            }
        }
    }

    /// Apply the form. Minute fields go through the same clamping as the
    /// settings file; an invalid custom colour is dropped.
    pub fn submit_settings_form(&mut self) {
        let Some(form) = self.settings_form.take() else {
            return;
        };
        self.ui_mode = UiMode::Normal;

        let mut updated = self.settings.clone();
        updated.set_minutes(Mode::Focus, parse_minutes(Mode::Focus, &form.focus));
        updated.set_minutes(Mode::ShortBreak, parse_minutes(Mode::ShortBreak, &form.short_break));
        updated.set_minutes(Mode::LongBreak, parse_minutes(Mode::LongBreak, &form.long_break));
        updated.theme = form.theme;
        updated.dark_mode = form.dark_mode;

        if form.custom_color.trim() != updated.custom_color && !updated.set_custom_color(&form.custom_color) {
            self.set_flash(format!(
                "\"{}\" is not a #rrggbb colour, keeping {}.",
                form.custom_color, updated.custom_color
            ));
        }

        self.apply_settings(updated);
    }

    pub fn cancel_settings_form(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Replace the settings. A changed duration for the current mode
    /// reloads the countdown; other changes leave it alone.
    pub fn apply_settings(&mut self, settings: Settings) {
        let mode = self.timer.mode();
        let duration_changed = settings.duration_secs(mode) != self.settings.duration_secs(mode);
        self.settings = settings;

        if duration_changed {
            self.configure_timer(mode);
        }
        tracing::info!(
            focus = self.settings.focus_mins,
            short_break = self.settings.short_break_mins,
            long_break = self.settings.long_break_mins,
            theme = self.settings.theme.name(),
            dark_mode = self.settings.dark_mode,
            "settings applied"
        );
    }

    pub fn toggle_help(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::Help => UiMode::Normal,
            _ => UiMode::Help,
        };
    }
}
