//! Spin command handler

use std::time::Duration;

use log::debug;
use tokio::time::sleep;

use crate::cli::SpinArgs;
use crate::ui::Spinner;
use crate::Cli;

use super::done_callback;

/// Build the spinner described by the arguments
pub fn build_spinner(cli: &Cli, args: &SpinArgs) -> Spinner {
    let mut spinner = Spinner::new()
        .with_theme(args.theme)
        .with_spinner_color(args.color.code())
        .with_message_color(args.message_color.code())
        .with_speed(Duration::from_millis(args.speed));

    if let Some(message) = &args.message {
        spinner = spinner.with_message(message.as_str());
    }
    if let Some(callback) = done_callback(cli.done.as_deref()) {
        spinner = spinner.with_callback(callback);
    }
    spinner
}

/// Run the spin command
///
/// Spins while a simulated job sleeps for `--duration` milliseconds.
pub async fn run_spin_command(
    cli: &Cli,
    args: &SpinArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = build_spinner(cli, args);

    debug!(
        "Spinning with theme '{}' for {}ms at {}ms per frame",
        args.theme, args.duration, args.speed
    );

    spinner.start();
    sleep(Duration::from_millis(args.duration)).await;
    spinner.stop();

    Ok(())
}
