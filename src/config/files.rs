use super::ConfigError;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Environment variable that overrides the settings file location
pub const CONFIG_ENV: &str = "POMOTERM_CONFIG";

/// Environment variable naming a log file
pub const LOG_ENV: &str = "POMOTERM_LOG";

/// Resolve the settings file: explicit path, then $POMOTERM_CONFIG,
/// then the platform config directory
pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(env_path) = env::var(CONFIG_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("pomoterm").join("settings.json"))
}

/// Resolve the log file: explicit path, then $POMOTERM_LOG. None disables logging.
pub fn log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env::var(LOG_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&dir).map_err(|source| ConfigError::Write {
        path: dir.clone(),
        source,
    })?;

    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.as_file().sync_all().map_err(write_err)?;

    // Atomically rename temp file to target
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
}
