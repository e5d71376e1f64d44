//! spinix - animated terminal spinners and progress bars
//!
//! Widgets redraw a single console line in place from a background thread
//! while the caller's work proceeds.
//!
//! # Features
//!
//! - 29 spinner themes plus custom frame sequences
//! - Progress bars with eight style presets
//! - Thread-safe updates while a widget is running
//! - Restartable start/stop lifecycle with an optional stop callback
//!
//! # Example
//!
//! ```bash
//! # Spin for two seconds with a message
//! spinix spin -t rocket -m "Deploying..." -d 2000
//!
//! # Run a progress bar with a preset
//! spinix bar -s elegant --label "Copying"
//!
//! # List themes as JSON
//! spinix themes -o json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use cli::{BarArgs, Cli, Command, ListArgs, OutputFormat, SpinArgs};
pub use commands::{run_bar_command, run_spin_command};
pub use error::{Result, SpinixError};
pub use output::{output_styles, output_themes};
pub use ui::{BarStyle, Color, ProgressBar, Spinner, SpinnerTheme, Theme};
