//! Progress bar style presets

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::colors;
use crate::error::{Result, SpinixError};

/// Named progress bar looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarStyle {
    #[default]
    Basic,
    Classic,
    Minimal,
    Bold,
    Dashed,
    Elegant,
    Emoji,
    Futuristic,
}

/// Field values a preset writes onto a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarPreset {
    pub width: usize,
    pub bar_char: &'static str,
    pub empty_char: &'static str,
    pub left_border: &'static str,
    pub right_border: &'static str,
    #[serde(skip)]
    pub color: &'static str,
}

impl BarStyle {
    pub fn all() -> &'static [BarStyle] {
        Self::value_variants()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BarStyle::Basic => "basic",
            BarStyle::Classic => "classic",
            BarStyle::Minimal => "minimal",
            BarStyle::Bold => "bold",
            BarStyle::Dashed => "dashed",
            BarStyle::Elegant => "elegant",
            BarStyle::Emoji => "emoji",
            BarStyle::Futuristic => "futuristic",
        }
    }

    /// The six field values this style applies
    pub fn preset(&self) -> BarPreset {
        let (width, bar_char, empty_char, left_border, right_border, color) = match self {
            BarStyle::Basic => (40, "=", "-", "|", "|", colors::BLUE),
            BarStyle::Classic => (30, "#", ".", "[", "]", colors::GREEN),
            BarStyle::Minimal => (20, "*", " ", "", "", colors::CYAN),
            BarStyle::Bold => (50, "■", " ", "❮", "❯", colors::MAGENTA),
            BarStyle::Dashed => (45, "▮", "▯", "[", "]", colors::RED),
            BarStyle::Elegant => (35, "▰", "▱", "❬", "❭", colors::BRIGHT_BLUE),
            BarStyle::Emoji => (25, "🚀", "✨", "🚩", "🎯", colors::YELLOW),
            BarStyle::Futuristic => (40, "◉", "○", "⟦", "⟧", colors::BRIGHT_CYAN),
        };
        BarPreset {
            width,
            bar_char,
            empty_char,
            left_border,
            right_border,
            color,
        }
    }
}

impl fmt::Display for BarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BarStyle {
    type Err = SpinixError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|style| style.name() == wanted)
            .copied()
            .ok_or_else(|| SpinixError::UnknownStyle(s.to_string()))
    }
}
