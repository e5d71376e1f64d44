//! Listing command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'themes' and 'styles' subcommands
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
