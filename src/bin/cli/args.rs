//! CLI Argument Structures
//!
//! Command-line definitions for the colcheck binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column name compliance checker
#[derive(Parser)]
#[command(name = "colcheck")]
#[command(version = VERSION)]
#[command(about = "Check dataset column names against the naming standard")]
#[command(long_about = "
Validate column names against the controlled filter vocabulary, banned and
protected words, exception casing and the snake_case rules, and check table
data for out-of-range coordinates and -999 sentinels.

Common Usage:

  # Check a few names
  colcheck names ra_j2000 fuvGALEX uberID

  # Check a table (JSON) and emit a machine-readable report
  colcheck table gama_sizes.json --format json

  # Use a custom lexicon and thresholds
  colcheck --lexicon my_lexicon.yaml --config colcheck.yaml names mag_u_SDSS

  # Guess UCDs for column names
  colcheck ucd ra_j2000 mag_FUV_GALEX
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "COLCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lexicon file (YAML); overrides the one named in the configuration
    #[arg(short, long, global = true, env = "COLCHECK_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate column names
    Names(NamesArgs),

    /// Validate the column names and data of a JSON table
    Table(TableArgs),

    /// Guess UCD strings for column names
    Ucd(UcdArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Print the bundled lexicon in YAML format
    #[command(name = "print-default-lexicon")]
    PrintDefaultLexicon,

    /// Validate a configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateFileArgs),

    /// Validate a lexicon file
    #[command(name = "validate-lexicon")]
    ValidateLexicon(ValidateFileArgs),
}

/// Arguments for `names`
#[derive(Args)]
pub struct NamesArgs {
    /// Column names to check
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Print the full per-check breakdown for every name
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for `table`
#[derive(Args)]
pub struct TableArgs {
    /// JSON table file
    pub file: PathBuf,

    /// Also print inferred column metadata (UCD, min, max)
    #[arg(long)]
    pub metadata: bool,
}

/// Arguments for `ucd`
#[derive(Args)]
pub struct UcdArgs {
    /// Column names to look up
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the file validation commands
#[derive(Args)]
pub struct ValidateFileArgs {
    /// File to validate
    pub file: PathBuf,
}

/// Output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}
