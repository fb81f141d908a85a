//! colcheck CLI - column name compliance checker
//!
//! Validates column names and table data against the naming standard and
//! prints text, JSON or YAML reports.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};
use colcheck_rs::ReportRenderer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; RUST_LOG takes precedence over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    let renderer = ReportRenderer::new(!cli.no_color);

    // Execute command
    match cli.command {
        Commands::Names(args) => {
            let validator = cli::load_validator(cli.config.as_deref(), cli.lexicon.as_deref())?;
            cli::names_command(args, &validator, cli.format, renderer)?;
        }
        Commands::Table(args) => {
            let validator = cli::load_validator(cli.config.as_deref(), cli.lexicon.as_deref())?;
            cli::table_command(args, &validator, cli.format, renderer)?;
        }
        Commands::Ucd(args) => {
            let validator = cli::load_validator(cli.config.as_deref(), cli.lexicon.as_deref())?;
            cli::ucd_command(args, &validator, cli.format)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
        Commands::PrintDefaultLexicon => {
            cli::print_default_lexicon()?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args, !cli.no_color)?;
        }
        Commands::ValidateLexicon(args) => {
            cli::validate_lexicon(args, !cli.no_color)?;
        }
    }

    Ok(())
}
