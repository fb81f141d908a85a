//! Validation commands: `names`, `table` and `ucd`.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use colcheck_rs::io::reports::{serialize_report, DataFormat};
use colcheck_rs::{ColcheckConfig, DatasetValidator, NameSummary, ReportRenderer, Table};

use crate::cli::args::{NamesArgs, OutputFormat, TableArgs, UcdArgs};

/// Build the engine from the optional config and lexicon paths.
pub fn load_validator(
    config_path: Option<&Path>,
    lexicon_path: Option<&Path>,
) -> anyhow::Result<DatasetValidator> {
    let mut config = match config_path {
        Some(path) => ColcheckConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ColcheckConfig::default(),
    };
    if let Some(path) = lexicon_path {
        debug!("Lexicon override: {}", path.display());
        config.lexicon = Some(path.to_path_buf());
    }
    Ok(DatasetValidator::from_config(config)?)
}

fn data_format(format: OutputFormat) -> Option<DataFormat> {
    match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(DataFormat::Json),
        OutputFormat::Yaml => Some(DataFormat::Yaml),
    }
}

fn print_serialized<T: Serialize + ?Sized>(value: &T, format: DataFormat) -> anyhow::Result<()> {
    let output = serialize_report(value, format)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Validate column names; exits with status 1 if any is not compliant.
pub fn names_command(
    args: NamesArgs,
    validator: &DatasetValidator,
    format: OutputFormat,
    renderer: ReportRenderer,
) -> anyhow::Result<()> {
    let reports = validator.validate_names(&args.names);
    let all_valid = reports.iter().all(|report| report.is_valid());

    match data_format(format) {
        Some(format) => print_serialized(&reports, format)?,
        None => {
            for report in &reports {
                if args.detailed {
                    println!("{}", renderer.render_name(report));
                } else {
                    println!("{}", renderer.render_name_line(report));
                }
            }
            println!();
            println!("{}", renderer.render_summary(&NameSummary::from_reports(&reports)));
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Validate a JSON table; exits with status 1 if anything fails.
pub fn table_command(
    args: TableArgs,
    validator: &DatasetValidator,
    format: OutputFormat,
    renderer: ReportRenderer,
) -> anyhow::Result<()> {
    let table = Table::from_json_file(&args.file)
        .with_context(|| format!("Failed to load table from {}", args.file.display()))?;
    let report = validator.validate_table(&table);

    match data_format(format) {
        Some(format) => print_serialized(&report, format)?,
        None => {
            println!("{}", renderer.render_dataset(&report));
            if args.metadata {
                println!();
                println!("Column Metadata");
                println!("{}", renderer.render_metadata(&validator.describe_columns(&table)));
            }
        }
    }

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Serialize)]
struct UcdGuess<'a> {
    name: &'a str,
    ucd: Option<String>,
}

/// Print guessed UCDs, one per name.
pub fn ucd_command(
    args: UcdArgs,
    validator: &DatasetValidator,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let guesses: Vec<UcdGuess<'_>> = args
        .names
        .iter()
        .map(|name| UcdGuess {
            name,
            ucd: validator.guess_ucd(name),
        })
        .collect();

    match data_format(format) {
        Some(format) => print_serialized(&guesses, format)?,
        None => {
            for guess in &guesses {
                println!("{}\t{}", guess.name, guess.ucd.as_deref().unwrap_or("-"));
            }
        }
    }
    Ok(())
}
