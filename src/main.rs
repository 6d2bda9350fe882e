//! nobg - make flat sprite backgrounds transparent.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::NobgConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);
    let config = NobgConfig::load(&cli)?;

    // Per-file failures are already logged; they never change the exit status.
    cli::run::remove_backgrounds(&config);
    Ok(())
}
