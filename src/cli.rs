//! Command-line interface for Magical Arena
//!
//! Supports both interactive (default) and headless modes.

use clap::Parser;
use std::path::PathBuf;

/// Turn-based arena duel simulator
#[derive(Parser, Debug)]
#[command(name = "magical-arena")]
#[command(about = "Turn-based arena duel simulator")]
#[command(version)]
pub struct Args {
    /// Run a single contest from the specified JSON config file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub headless: Option<PathBuf>,

    /// Output path for the contest report (headless mode only)
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Seed the dice for reproducible contests
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colored menu output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file (RON)
    #[arg(long, value_name = "SETTINGS_FILE")]
    pub settings: Option<PathBuf>,
}

pub fn parse_args() -> Args {
    Args::parse()
}
