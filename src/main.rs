//! spinix - Main entry point

use clap::Parser;
use log::{debug, info};

use spinix::{
    output_styles, output_themes, run_bar_command, run_spin_command, Cli, Command,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting spinix v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli);

    match &cli.command {
        Command::Spin(args) => run_spin_command(&cli, args).await?,
        Command::Bar(args) => run_bar_command(&cli, args).await?,
        Command::Themes(args) => output_themes(args.output)?,
        Command::Styles(args) => output_styles(args.output)?,
    }

    info!("Completed successfully");
    Ok(())
}
