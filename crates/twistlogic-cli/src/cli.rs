//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use twistlogic_ir::Dialect;

#[derive(Parser)]
#[command(name = "twistlogic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace document (JSON or YAML) with lattices, worlds and models
    #[arg(long, global = true, value_name = "FILE")]
    pub workspace: Option<PathBuf>,

    /// Formula dialect: material or residuated
    #[arg(short, long, global = true)]
    pub dialect: Option<Dialect>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Don't load configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a formula and show its structure
    Parse {
        /// Formula text, e.g. "[a]p & q"
        formula: String,
    },

    /// Evaluate a formula at one world of a model
    Eval {
        /// Formula text
        formula: String,

        /// Model name (optional when the workspace holds a single model)
        #[arg(short, long)]
        model: Option<String>,

        /// World, by long or short name
        #[arg(long)]
        world: String,
    },

    /// Check whether a formula holds at every world of a model
    Validity {
        /// Formula text
        formula: String,

        /// Model name (optional when the workspace holds a single model)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Summarize the objects in the workspace document
    Inspect,

    /// Start interactive REPL mode
    Repl,

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON serialization
    Json,
}
