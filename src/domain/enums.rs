use serde::{Deserialize, Serialize};

/// Countdown mode of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Header title shown above the mode selector
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Focus => "POMODORO",
            Mode::ShortBreak => "SHORT BREAK",
            Mode::LongBreak => "LONG BREAK",
        }
    }

    /// Title shown on the timer card
    pub fn card_title(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus Time",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Label for the mode selector tabs
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mode::Focus => "🍅",
            Mode::ShortBreak => "☕",
            Mode::LongBreak => "🌿",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Mode::Focus)
    }

    /// Parse a mode from a selector key ('1', '2', '3')
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Mode::Focus),
            '2' => Some(Mode::ShortBreak),
            '3' => Some(Mode::LongBreak),
            _ => None,
        }
    }

    /// Position of this mode in the selector
    pub fn index(&self) -> usize {
        match self {
            Mode::Focus => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }

    /// Get all modes in selector order
    pub fn all() -> &'static [Mode] {
        &[Mode::Focus, Mode::ShortBreak, Mode::LongBreak]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingSettings,
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_key() {
        assert_eq!(Mode::from_key('1'), Some(Mode::Focus));
        assert_eq!(Mode::from_key('2'), Some(Mode::ShortBreak));
        assert_eq!(Mode::from_key('3'), Some(Mode::LongBreak));
        assert_eq!(Mode::from_key('4'), None);
    }

    #[test]
    fn test_mode_titles() {
        assert_eq!(Mode::Focus.title(), "POMODORO");
        assert_eq!(Mode::LongBreak.card_title(), "Long Break");
        assert_eq!(Mode::ShortBreak.label(), "Short Break");
    }

    #[test]
    fn test_mode_is_break() {
        assert!(!Mode::Focus.is_break());
        assert!(Mode::ShortBreak.is_break());
        assert!(Mode::LongBreak.is_break());
    }

    #[test]
    fn test_mode_index_matches_all() {
        for (idx, mode) in Mode::all().iter().enumerate() {
            assert_eq!(mode.index(), idx);
        }
    }
}
