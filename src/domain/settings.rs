use super::enums::Mode;
use super::theme::{parse_hex_color, Theme, DEFAULT_CUSTOM_COLOR};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_FOCUS_MINS: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINS: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINS: u32 = 15;

/// User adjustable timer durations and appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "focus_minutes")]
    pub focus_mins: u32,
    #[serde(deserialize_with = "short_break_minutes")]
    pub short_break_mins: u32,
    #[serde(deserialize_with = "long_break_minutes")]
    pub long_break_mins: u32,
    pub theme: Theme,
    pub custom_color: String,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_mins: DEFAULT_FOCUS_MINS,
            short_break_mins: DEFAULT_SHORT_BREAK_MINS,
            long_break_mins: DEFAULT_LONG_BREAK_MINS,
            theme: Theme::Tomato,
            custom_color: DEFAULT_CUSTOM_COLOR.to_string(),
            dark_mode: false,
        }
    }
}

/// Inclusive minute bounds for a mode
pub fn minute_bounds(mode: Mode) -> (u32, u32) {
    match mode {
        Mode::Focus => (1, 60),
        Mode::ShortBreak => (1, 30),
        Mode::LongBreak => (1, 60),
    }
}

pub fn default_minutes(mode: Mode) -> u32 {
    match mode {
        Mode::Focus => DEFAULT_FOCUS_MINS,
        Mode::ShortBreak => DEFAULT_SHORT_BREAK_MINS,
        Mode::LongBreak => DEFAULT_LONG_BREAK_MINS,
    }
}

/// Clamp a minute value into the mode's bounds. Zero means "unset" and
/// yields the default.
pub fn clamp_minutes(mode: Mode, minutes: u32) -> u32 {
    if minutes == 0 {
        return default_minutes(mode);
    }
    let (min, max) = minute_bounds(mode);
    minutes.clamp(min, max)
}

/// Parse user input for a duration field. Non-numeric, empty and zero
/// input fall back to the default; anything else is clamped.
pub fn parse_minutes(mode: Mode, input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) => minutes_from_int(mode, n),
        Err(_) => default_minutes(mode),
    }
}

fn minutes_from_int(mode: Mode, n: i64) -> u32 {
    if n < 0 {
        return minute_bounds(mode).0;
    }
    clamp_minutes(mode, n.min(u32::MAX as i64) as u32)
}

/// Read a minute field from any JSON value. Numbers are truncated and
/// clamped, strings go through `parse_minutes`, anything else is the default.
fn lenient_minutes<'de, D>(mode: Mode, deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => minutes_from_int(mode, i),
            None => match n.as_f64() {
                Some(f) if f.is_finite() => minutes_from_int(mode, f.trunc() as i64),
                _ => default_minutes(mode),
            },
        },
        Value::String(s) => parse_minutes(mode, &s),
        _ => default_minutes(mode),
    };
    Ok(minutes)
}

fn focus_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(Mode::Focus, deserializer)
}

fn short_break_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(Mode::ShortBreak, deserializer)
}

fn long_break_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_minutes(Mode::LongBreak, deserializer)
}

impl Settings {
    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_mins,
            Mode::ShortBreak => self.short_break_mins,
            Mode::LongBreak => self.long_break_mins,
        }
    }

    pub fn set_minutes(&mut self, mode: Mode, minutes: u32) {
        let minutes = clamp_minutes(mode, minutes);
        match mode {
            Mode::Focus => self.focus_mins = minutes,
            Mode::ShortBreak => self.short_break_mins = minutes,
            Mode::LongBreak => self.long_break_mins = minutes,
        }
    }

    /// Countdown length for a mode, in seconds
    pub fn duration_secs(&self, mode: Mode) -> u32 {
        clamp_minutes(mode, self.minutes(mode)) * 60
    }

    /// Set the custom colour. Switches the theme to `Custom`.
    /// Invalid colours are ignored and leave everything unchanged.
    pub fn set_custom_color(&mut self, input: &str) -> bool {
        if parse_hex_color(input).is_none() {
            return false;
        }
        self.custom_color = input.trim().to_lowercase();
        self.theme = Theme::Custom;
        true
    }

    /// Bring every field into range (used after loading a file or CLI flags)
    pub fn sanitized(mut self) -> Self {
        for mode in Mode::all() {
            let mins = self.minutes(*mode);
            self.set_minutes(*mode, mins);
        }
        if parse_hex_color(&self.custom_color).is_none() {
            self.custom_color = DEFAULT_CUSTOM_COLOR.to_string();
        }
        self
    }

    /// Accent colour of the active theme
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        self.theme.accent_rgb(&self.custom_color)
    }
}
