/// Default values for widgets and CLI
pub mod defaults {
    /// Default interval between two redraws, in milliseconds
    pub const SPEED_MS: u64 = 100;

    /// Default progress bar width (cells between the borders)
    pub const BAR_WIDTH: usize = 40;

    /// Default filled cell
    pub const BAR_CHAR: &str = "█";

    /// Default empty cell
    pub const EMPTY_CHAR: &str = " ";

    /// Default left border
    pub const LEFT_BORDER: &str = "[";

    /// Default right border
    pub const RIGHT_BORDER: &str = "]";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default run time of `spinix spin`, in milliseconds
    pub const SPIN_DURATION_MS: u64 = 3000;

    /// Default delay between progress steps of `spinix bar`, in milliseconds
    pub const BAR_STEP_MS: u64 = 50;
}

/// Terminal control sequences
pub mod term {
    /// Return to the start of the current line
    pub const CARRIAGE_RETURN: &str = "\r";

    /// Reset all SGR attributes
    pub const RESET: &str = "\x1b[0m";

    /// Return to the start of the line and erase it
    pub const CLEAR_LINE: &str = "\r\x1b[K";
}

/// SGR foreground color codes
pub mod colors {
    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_line_starts_with_carriage_return() {
        assert!(term::CLEAR_LINE.starts_with(term::CARRIAGE_RETURN));
        assert!(term::CLEAR_LINE.ends_with("\x1b[K"));
    }

    #[test]
    fn test_default_colors_are_sgr() {
        for code in [colors::GREEN, colors::BLUE, colors::BRIGHT_CYAN] {
            assert!(code.starts_with("\x1b["));
            assert!(code.ends_with('m'));
        }
    }

    #[test]
    fn test_default_bar_width() {
        assert_eq!(defaults::BAR_WIDTH, 40);
        assert_eq!(defaults::SPEED_MS, 100);
    }
}
