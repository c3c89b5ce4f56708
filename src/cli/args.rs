//! Command-line interface definitions.

use crate::config::PageKind;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// folio - portfolio site metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a folio.toml holding the built-in metadata
    #[command(visible_alias = "i")]
    Init {
        /// Print the template to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the metadata in folio.toml
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the metadata as JSON for templates
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Only print the metadata of one page
    #[arg(long, value_enum)]
    pub page: Option<PageKind>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    /// `check --strict`: unknown fields become errors.
    pub const fn is_strict(&self) -> bool {
        matches!(self.command, Commands::Check { strict: true })
    }
}
