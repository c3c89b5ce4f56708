//! folio - static metadata for a personal portfolio site.

#![allow(dead_code)]

mod cli;
mod config;
mod consts;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { dry, force } => cli::init::new_config(&config, *dry, *force),
        Commands::Check { .. } => cli::check::check_config(&config),
        Commands::Show { args } => cli::show::show_metadata(args, &config),
    }
}
