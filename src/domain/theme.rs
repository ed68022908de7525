use serde::{Deserialize, Serialize};

/// Default colour for the custom theme
pub const DEFAULT_CUSTOM_COLOR: &str = "#ff6b6b";

/// Accent colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Tomato,
    Ocean,
    Forest,
    Sunset,
    Purple,
    Custom,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Tomato => "Tomato",
            Theme::Ocean => "Ocean",
            Theme::Forest => "Forest",
            Theme::Sunset => "Sunset",
            Theme::Purple => "Purple",
            Theme::Custom => "Custom",
        }
    }

    /// Hex accent of a preset. `None` for `Custom`, whose colour is user supplied.
    pub fn preset_hex(&self) -> Option<&'static str> {
        match self {
            Theme::Tomato => Some("#ef4444"),
            Theme::Ocean => Some("#3b82f6"),
            Theme::Forest => Some("#22c55e"),
            Theme::Sunset => Some("#f97316"),
            Theme::Purple => Some("#a855f7"),
            Theme::Custom => None,
        }
    }

    /// Accent as RGB, resolving `Custom` through the given colour
    pub fn accent_rgb(&self, custom_color: &str) -> (u8, u8, u8) {
        let hex = self.preset_hex().unwrap_or(custom_color);
        parse_hex_color(hex)
            .or_else(|| parse_hex_color(DEFAULT_CUSTOM_COLOR))
            .unwrap_or((255, 107, 107))
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Parse a theme from its name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn all() -> &'static [Theme] {
        &[
            Theme::Tomato,
            Theme::Ocean,
            Theme::Forest,
            Theme::Sunset,
            Theme::Purple,
            Theme::Custom,
        ]
    }
}

/// Parse "#rrggbb" into RGB components
pub fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
