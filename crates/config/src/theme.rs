//! Theme types for the TUI.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with concrete color values.
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime
//!   representation and is intentionally not serializable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme, persisted via `PersistedState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (theme keybinding).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme. Persist `ColorTheme`, expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    pub highlight_fg: Color,
    pub highlight_bg: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub table_header_fg: Color,
    pub table_header_bg: Color,
}

impl From<ColorTheme> for Theme {
    fn from(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::DarkGray,
                border: Color::Gray,
                title: Color::Cyan,
                accent: Color::Cyan,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                table_header_fg: Color::Cyan,
                table_header_bg: Color::Reset,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::DarkGray,
                title: Color::Blue,
                accent: Color::Blue,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                success: Color::Green,
                warning: Color::Rgb(180, 120, 0),
                error: Color::Red,
                info: Color::Blue,
                table_header_fg: Color::Blue,
                table_header_bg: Color::White,
            },
            ColorTheme::Dark => Self {
                background: Color::Rgb(20, 20, 25),
                text: Color::Rgb(220, 220, 220),
                text_dim: Color::Rgb(110, 110, 120),
                border: Color::Rgb(70, 70, 80),
                title: Color::Rgb(130, 170, 255),
                accent: Color::Rgb(130, 170, 255),
                highlight_fg: Color::Black,
                highlight_bg: Color::Rgb(130, 170, 255),
                success: Color::Rgb(120, 200, 120),
                warning: Color::Rgb(230, 190, 80),
                error: Color::Rgb(240, 110, 110),
                info: Color::Rgb(120, 160, 240),
                table_header_fg: Color::Rgb(130, 170, 255),
                table_header_bg: Color::Rgb(20, 20, 25),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightBlue,
                table_header_fg: Color::Yellow,
                table_header_bg: Color::Black,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::DarkGray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                success: Color::White,
                warning: Color::Gray,
                error: Color::White,
                info: Color::Gray,
                table_header_fg: Color::White,
                table_header_bg: Color::Reset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut theme = ColorTheme::Default;
        let mut seen = vec![theme];
        loop {
            theme = theme.cycle_next();
            if theme == ColorTheme::Default {
                break;
            }
            seen.push(theme);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn persisted_form_is_snake_case() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
    }
}
