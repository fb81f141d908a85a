//! Configuration and lexicon management commands.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use colcheck_rs::{ColcheckConfig, Lexicon};

use crate::cli::args::ValidateFileArgs;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default colcheck configuration");
    println!("# Save this to a file and customize as needed");
    println!("# Usage: colcheck --config your-config.yml names <NAME>...");
    println!();

    let yaml_output = serde_yaml::to_string(&ColcheckConfig::default())?;
    print!("{}", yaml_output);

    Ok(())
}

/// Print the bundled lexicon
pub fn print_default_lexicon() -> anyhow::Result<()> {
    print!("{}", Lexicon::bundled_yaml());
    Ok(())
}

/// Row type for the file summary tables.
#[derive(Tabled)]
struct SettingRow {
    setting: String,
    value: String,
}

fn print_rows(rows: Vec<SettingRow>) {
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

/// Validate a configuration file
pub fn validate_config(args: ValidateFileArgs, color: bool) -> anyhow::Result<()> {
    let config = match ColcheckConfig::from_yaml_file(&args.file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration validation failed: {}", e);
            eprintln!("Tip: use 'colcheck print-default-config' to see the valid format");
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    let banner = "Configuration file is valid";
    if color {
        println!("{}", banner.bright_green().bold());
    } else {
        println!("{}", banner);
    }
    println!();

    let naming = &config.naming;
    let mut rows = vec![
        SettingRow {
            setting: "naming.warn_length".to_string(),
            value: naming.warn_length.to_string(),
        },
        SettingRow {
            setting: "naming.max_length".to_string(),
            value: naming.max_length.to_string(),
        },
        SettingRow {
            setting: "naming.filter_fuzzy".to_string(),
            value: format!("warn > {}, fail > {}", naming.filter_fuzzy.warn, naming.filter_fuzzy.fail),
        },
        SettingRow {
            setting: "naming.banned_fuzzy".to_string(),
            value: format!("warn > {}, fail > {}", naming.banned_fuzzy.warn, naming.banned_fuzzy.fail),
        },
        SettingRow {
            setting: "values.sentinel".to_string(),
            value: config.values.sentinel.to_string(),
        },
    ];
    for rule in &config.values.ranges {
        rows.push(SettingRow {
            setting: format!("values.ranges.{}", rule.root),
            value: rule.closed.describe(rule.min, rule.max),
        });
    }
    rows.push(SettingRow {
        setting: "lexicon".to_string(),
        value: config
            .lexicon
            .as_ref()
            .map_or_else(|| "(bundled)".to_string(), |path| path.display().to_string()),
    });
    print_rows(rows);

    Ok(())
}

/// Validate a lexicon file
pub fn validate_lexicon(args: ValidateFileArgs, color: bool) -> anyhow::Result<()> {
    let lexicon = match Lexicon::from_path(&args.file) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Lexicon validation failed: {}", e);
            eprintln!("Tip: use 'colcheck print-default-lexicon' to see the valid format");
            return Err(anyhow::anyhow!("Lexicon validation failed: {}", e));
        }
    };

    let banner = "Lexicon file is valid";
    if color {
        println!("{}", banner.bright_green().bold());
    } else {
        println!("{}", banner);
    }
    println!();

    print_rows(vec![
        SettingRow {
            setting: "banned words".to_string(),
            value: lexicon.banned_words().len().to_string(),
        },
        SettingRow {
            setting: "protected words".to_string(),
            value: lexicon.protected_words().len().to_string(),
        },
        SettingRow {
            setting: "filters".to_string(),
            value: lexicon.filters().len().to_string(),
        },
        SettingRow {
            setting: "exceptions".to_string(),
            value: lexicon.exceptions().len().to_string(),
        },
    ]);

    Ok(())
}
