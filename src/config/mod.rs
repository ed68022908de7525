pub mod files;

pub use files::{atomic_write, log_path, read_file, settings_path};

use crate::domain::{Mode, Settings, Theme};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Settings file already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Values given on the command line, applied on top of the settings file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub focus_mins: Option<u32>,
    pub short_break_mins: Option<u32>,
    pub long_break_mins: Option<u32>,
    pub theme: Option<Theme>,
    pub dark_mode: bool,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        let durations = [
            (Mode::Focus, self.focus_mins),
            (Mode::ShortBreak, self.short_break_mins),
            (Mode::LongBreak, self.long_break_mins),
        ];
        for (mode, minutes) in durations {
            if let Some(minutes) = minutes {
                settings.set_minutes(mode, minutes);
            }
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.dark_mode {
            settings.dark_mode = true;
        }
        settings
    }
}

/// Load settings from a JSON file. A missing file yields defaults; every
/// value is brought into range.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let settings = match read_file(path)? {
        Some(content) => serde_json::from_str::<Settings>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        None => Settings::default(),
    };
    Ok(settings.sanitized())
}

/// Write a settings file with default values. Refuses to overwrite.
pub fn init_settings<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let json = serde_json::to_string_pretty(&Settings::default())?;
    atomic_write(path, &json)?;
    Ok(path.to_path_buf())
}
