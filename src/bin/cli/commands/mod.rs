//! CLI Command Implementations
//!
//! - check: `names`, `table` and `ucd`
//! - config: configuration and lexicon management commands

pub mod check;
pub mod config;

pub use check::{load_validator, names_command, table_command, ucd_command};
pub use config::{print_default_config, print_default_lexicon, validate_config, validate_lexicon};
