//! Lander - landing page configuration tool.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lander::cli::{self, Cli, Commands};
use lander::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = cli.config.as_path();
    match &cli.command {
        Commands::Apply {
            input,
            output,
            page,
        } => cli::apply::apply_page(config, input, output.as_deref(), page),
        Commands::Get { path, page } => cli::query::get_value(config, path, page),
        Commands::Show { format, page } => cli::query::show_config(config, *format, page),
        Commands::Validate { page } => cli::validate::validate_config(config, page),
    }
}
