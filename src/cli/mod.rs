//! CLI argument parsing

mod bar;
mod common;
mod list;
mod spin;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use bar::BarArgs;
pub use common::OutputFormat;
pub use list::ListArgs;
pub use spin::SpinArgs;

/// Terminal spinner and progress bar demo
#[derive(Parser, Debug)]
#[command(name = "spinix")]
#[command(version)]
#[command(about = "Animated terminal spinners and progress bars", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Message printed once the widget has stopped
    #[arg(long, global = true)]
    pub done: Option<String>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a spinner for a while
    #[command(visible_alias = "spinner")]
    Spin(SpinArgs),

    /// Run a progress bar from 0 to 100%
    #[command(visible_alias = "progress")]
    Bar(BarArgs),

    /// List spinner themes
    #[command(visible_alias = "theme")]
    Themes(ListArgs),

    /// List progress bar style presets
    #[command(visible_alias = "style")]
    Styles(ListArgs),
}
