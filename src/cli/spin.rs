//! Spin command arguments

use clap::Parser;

use crate::config::defaults;
use crate::ui::{Color, SpinnerTheme};

/// Arguments for 'spin' subcommand
#[derive(Parser, Debug)]
pub struct SpinArgs {
    /// Spinner theme
    #[arg(short, long, value_enum, default_value_t = SpinnerTheme::ClassicDots)]
    pub theme: SpinnerTheme,

    /// Message shown next to the spinner
    #[arg(short, long)]
    pub message: Option<String>,

    /// Spinner color
    #[arg(short, long, value_enum, default_value_t = Color::Green)]
    pub color: Color,

    /// Message color
    #[arg(long, value_enum, default_value_t = Color::None)]
    pub message_color: Color,

    /// Milliseconds between frames
    #[arg(long, default_value_t = defaults::SPEED_MS)]
    pub speed: u64,

    /// How long to spin, in milliseconds
    #[arg(short, long, default_value_t = defaults::SPIN_DURATION_MS)]
    pub duration: u64,
}
