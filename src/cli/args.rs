//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use crate::index::IndexMode;
use crate::io::OutputFormat;
use crate::types::SymbolKind;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Index and hierarchy generator for documentation sets
#[derive(Parser, Debug)]
#[command(
    name = "docweave",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build name indexes and inheritance trees from a symbol model",
    long_about = "Partition documented names into an alphabetical index and arrange \
                  classes, interfaces, enums and annotation types into inheritance forests.",
    next_line_help = true,
    styles = clap_cargo_style(),
    after_help = "Quick Start:\n  $ docweave init\n  $ docweave index model.json --split\n  $ docweave tree model.json --kind interface\n  $ docweave build model.json --json"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .docweave directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .docweave/settings.toml")]
    Config,

    /// Generate the alphabetical name index
    #[command(
        about = "Partition documented names into index pages",
        after_help = "Examples:\n  docweave index model.json\n  docweave index model.json --split --json\n\nJSON paths:\n  .data.pages[].buckets[].symbols[].name\n  .data.unnamed[].kind"
    )]
    Index {
        /// Symbol model file (defaults to model_path in settings)
        #[arg(value_name = "MODEL")]
        model: Option<PathBuf>,

        /// One page per leading character
        #[arg(long, conflicts_with = "combined")]
        split: bool,

        /// Everything on a single page
        #[arg(long)]
        combined: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate inheritance forests
    #[command(
        about = "Arrange type symbols into inheritance trees",
        after_help = "Examples:\n  docweave tree model.json\n  docweave tree model.json --kind interface\n\nKinds: class, interface, enum, annotation-type"
    )]
    Tree {
        /// Symbol model file (defaults to model_path in settings)
        #[arg(value_name = "MODEL")]
        model: Option<PathBuf>,

        /// Only build the forest of this kind
        #[arg(short, long)]
        kind: Option<SymbolKind>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate index and forests in one run
    #[command(about = "Build the full documentation set")]
    Build {
        /// Symbol model file (defaults to model_path in settings)
        #[arg(value_name = "MODEL")]
        model: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Output format requested by `--json`; commands without it print text.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Index { json, .. }
            | Commands::Tree { json, .. }
            | Commands::Build { json, .. } => OutputFormat::from_json_flag(*json),
            Commands::Init { .. } | Commands::Config => OutputFormat::Text,
        }
    }

    /// Index mode forced by `--split`/`--combined`, if any.
    pub fn index_mode_override(&self) -> Option<IndexMode> {
        match self {
            Commands::Index { split: true, .. } => Some(IndexMode::Split),
            Commands::Index { combined: true, .. } => Some(IndexMode::Combined),
            _ => None,
        }
    }
}
