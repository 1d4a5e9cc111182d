//! lumen CLI - demonstration entry point for the geometry kernel.
//!
//! `lumen demo` composes a transform and prints the matrix; `lumen probe`
//! shoots a ray at a sphere and prints both intersection slots.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod logger;

use cli::{Cli, Commands};
use config::Config;
use logger::init_logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.into());

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let report = commands::run_demo(&config.demo);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", commands::format_demo(&report));
            }
        }
        Commands::Probe => {
            let report = commands::run_probe(&config.probe)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", commands::format_probe(&report));
            }
        }
    }

    Ok(())
}
