//! Bar command handler

use std::time::Duration;

use log::debug;
use tokio::time::sleep;

use crate::cli::BarArgs;
use crate::ui::ProgressBar;
use crate::Cli;

use super::done_callback;

/// Build the progress bar described by the arguments
///
/// The style preset goes first so explicit options override its fields.
pub fn build_bar(cli: &Cli, args: &BarArgs) -> ProgressBar {
    let mut bar = ProgressBar::new().with_speed(Duration::from_millis(args.speed));

    if let Some(style) = args.style {
        bar = bar.with_style(style);
    }
    if let Some(width) = args.width {
        bar = bar.with_width(width);
    }
    if let Some(color) = args.color {
        bar = bar.with_color(color.code());
    }
    if let Some(label) = &args.label {
        bar = bar.with_label(label.as_str());
    }
    if args.no_percentage {
        bar = bar.with_show_percentage(false);
    }
    if let Some(callback) = done_callback(cli.done.as_deref()) {
        bar = bar.with_callback(callback);
    }
    bar
}

/// Run the bar command
///
/// Drives the bar from 0 to 100 in steps of one percent.
pub async fn run_bar_command(cli: &Cli, args: &BarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bar = build_bar(cli, args);
    let step = Duration::from_millis(args.step);

    debug!("Running progress bar with {}ms per step", args.step);

    bar.start();
    for progress in 0..=100 {
        bar.update(progress);
        sleep(step).await;
    }
    // Let the final 100% frame be drawn before clearing the line
    sleep(bar.speed() * 2).await;
    bar.stop();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_bar_from_args() {
        let cli = Cli::parse_from(["spinix", "bar", "-s", "classic", "-w", "12", "--speed", "30"]);
        let crate::Command::Bar(args) = &cli.command else {
            panic!("Expected bar command");
        };
        let bar = build_bar(&cli, args);
        assert_eq!(bar.speed(), Duration::from_millis(30));
        assert_eq!(bar.progress(), 0);
    }
}
