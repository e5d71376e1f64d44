//! Bar command arguments

use clap::Parser;

use crate::config::defaults;
use crate::ui::{BarStyle, Color};

/// Arguments for 'bar' subcommand
///
/// Explicit options are applied after the style preset, so they override
/// the matching preset fields.
#[derive(Parser, Debug)]
pub struct BarArgs {
    /// Style preset
    #[arg(short, long, value_enum)]
    pub style: Option<BarStyle>,

    /// Bar width in cells
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Label shown after the bar
    #[arg(long)]
    pub label: Option<String>,

    /// Bar color
    #[arg(short, long, value_enum)]
    pub color: Option<Color>,

    /// Hide the percentage
    #[arg(long, default_value_t = false)]
    pub no_percentage: bool,

    /// Milliseconds between two progress steps
    #[arg(long, default_value_t = defaults::BAR_STEP_MS)]
    pub step: u64,

    /// Milliseconds between redraws
    #[arg(long, default_value_t = defaults::SPEED_MS)]
    pub speed: u64,
}
