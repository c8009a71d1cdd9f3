//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Preset;

/// Landing page configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Override file path, searched upward from the working directory
    #[arg(short = 'C', long, global = true, default_value = "lander.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Bind the configuration to an HTML page (theme colors, title, description)
    #[command(visible_alias = "a")]
    Apply {
        /// HTML file to update
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the value at a dotted path (e.g. `hero.title.main`)
    #[command(visible_alias = "g")]
    Get {
        /// Dotted path into the page configuration
        path: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the merged page configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Check the merged page configuration
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Shared arguments selecting the page configuration.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Preset the override file is merged onto
    #[arg(short, long, value_enum, default_value_t = Preset::Default)]
    pub page: Preset,

    /// Set a value after merging: `path=json` (plain text is taken as a string)
    #[arg(short, long = "set", value_name = "PATH=VALUE")]
    pub set: Vec<String>,

    /// Ignore the override file
    #[arg(long)]
    pub no_config: bool,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Toml,
}
