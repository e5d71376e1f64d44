//! Named foreground colors for the command line

use clap::ValueEnum;

use crate::config::colors;

/// Foreground color accepted by `--color` style arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Color {
    /// Terminal default
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlue,
    BrightCyan,
}

impl Color {
    /// SGR sequence selecting this color, empty for `None`
    pub fn code(&self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => colors::BLACK,
            Color::Red => colors::RED,
            Color::Green => colors::GREEN,
            Color::Yellow => colors::YELLOW,
            Color::Blue => colors::BLUE,
            Color::Magenta => colors::MAGENTA,
            Color::Cyan => colors::CYAN,
            Color::White => colors::WHITE,
            Color::BrightBlue => colors::BRIGHT_BLUE,
            Color::BrightCyan => colors::BRIGHT_CYAN,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Black => write!(f, "black"),
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Yellow => write!(f, "yellow"),
            Color::Blue => write!(f, "blue"),
            Color::Magenta => write!(f, "magenta"),
            Color::Cyan => write!(f, "cyan"),
            Color::White => write!(f, "white"),
            Color::BrightBlue => write!(f, "bright-blue"),
            Color::BrightCyan => write!(f, "bright-cyan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_empty_code() {
        assert_eq!(Color::None.code(), "");
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Green.code(), "\x1b[32m");
        assert_eq!(Color::BrightCyan.code(), "\x1b[96m");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::BrightBlue.to_string(), "bright-blue");
        assert_eq!(Color::Red.to_string(), "red");
    }
}
