//! Human-readable rendering of validation reports.
//!
//! Reports stay plain data; this module turns them into terminal text.
//! Machine-readable output is plain serde serialization of the same reports.

use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::api::results::{DatasetReport, NameSummary};
use crate::core::errors::Result;
use crate::core::status::{State, Status};
use crate::detectors::names::NameReport;
use crate::detectors::ucd::ColumnMetadata;
use crate::detectors::values::DataValueReport;

const RULE_WIDTH: usize = 70;

/// Serialization formats for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Serialize any report with the requested format.
pub fn serialize_report<T: Serialize + ?Sized>(report: &T, format: DataFormat) -> Result<String> {
    Ok(match format {
        DataFormat::Json => serde_json::to_string_pretty(report)?,
        DataFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Issues")]
    issues: String,
}

#[derive(Tabled)]
struct MetadataRow {
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "UCD")]
    ucd: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

/// Renders reports as text, optionally with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    color: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ReportRenderer {
    /// Renderer with colors switched on or off.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn state_style(state: State) -> Style {
        match state {
            State::Pass => Style::new().green(),
            State::Warning => Style::new().yellow(),
            State::Fail => Style::new().red(),
        }
    }

    fn state(&self, state: State) -> String {
        let symbol = match state {
            State::Pass => "✓",
            State::Warning => "!",
            State::Fail => "✗",
        };
        self.paint(&format!("{symbol} {state}"), Self::state_style(state))
    }

    fn status(&self, status: &Status) -> String {
        self.state(status.state())
    }

    fn verdict(&self, valid: bool) -> String {
        if valid {
            self.paint("VALID", Style::new().green().bold())
        } else {
            self.paint("INVALID", Style::new().red().bold())
        }
    }

    fn heading(&self, out: &mut String, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        let bold = Style::new().bold();
        let _ = writeln!(out, "{}", self.paint(&rule, bold));
        let _ = writeln!(out, "{}", self.paint(title, bold));
        let _ = writeln!(out, "{}", self.paint(&rule, bold));
    }

    /// Full per-dimension breakdown of one name.
    pub fn render_name(&self, report: &NameReport) -> String {
        let mut out = String::new();
        self.heading(&mut out, "Column Name Validation Report");
        let _ = writeln!(out, "Column: {}", report.name());
        let _ = writeln!(out, "Overall: {}", self.verdict(report.is_valid()));
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

        for (kind, status) in report.dimensions() {
            let _ = write!(out, "  {:<20} {}", kind.label(), self.status(status));
            if let Some(message) = status.message() {
                let _ = write!(out, "  {}", self.paint(message, Style::new().dimmed()));
            }
            out.push('\n');
        }
        out
    }

    /// One line per name: verdict plus the dimensions that did not pass.
    pub fn render_name_line(&self, report: &NameReport) -> String {
        let state = self.state(report.worst_state());
        let issues = Self::issue_list(report);
        if issues.is_empty() {
            format!("{} {}", state, report.name())
        } else {
            format!("{} {}: {}", state, report.name(), issues)
        }
    }

    fn issue_list(report: &NameReport) -> String {
        report
            .issues()
            .map(|(kind, status)| match status.message() {
                Some(message) if !message.is_empty() => format!("{} ({})", kind.label(), message),
                _ => kind.label().to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Range and sentinel results.
    pub fn render_values(&self, report: &DataValueReport) -> String {
        let mut out = String::new();
        self.heading(&mut out, "Table Data Validation Report");
        let _ = writeln!(out, "Table: {}", report.table_name);
        let _ = writeln!(out, "Overall: {}", self.verdict(report.valid));
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

        for range in &report.ranges {
            let column = range.column.as_deref().unwrap_or("-");
            let _ = write!(
                out,
                "  {} column '{}' in {}: {}",
                range.root,
                column,
                range.interval,
                self.status(&range.status)
            );
            if let Some(message) = range.status.message() {
                let _ = write!(out, "  {}", self.paint(message, Style::new().dimmed()));
            }
            out.push('\n');
        }

        let _ = writeln!(out, "  No sentinel values: {}", self.status(&report.sentinel));
        for column in &report.sentinel_columns {
            let _ = writeln!(
                out,
                "    {} column '{}' uses the sentinel as a missing value",
                self.paint("→", Style::new().yellow()),
                column
            );
        }
        out
    }

    /// Summary table of column names followed by the data checks.
    pub fn render_dataset(&self, report: &DatasetReport) -> String {
        let mut out = String::new();
        self.heading(&mut out, "Dataset Validation Report");
        let _ = writeln!(out, "Table: {}", report.table_name);
        let _ = writeln!(out, "Overall: {}", self.verdict(report.valid));
        let _ = writeln!(out, "Column names: {}", self.verdict(report.valid_column_names));
        let _ = writeln!(out, "Data values: {}", self.verdict(report.valid_data));
        out.push('\n');

        let rows: Vec<ColumnRow> = report
            .column_names
            .iter()
            .map(|name| ColumnRow {
                name: name.name().to_string(),
                result: self.verdict(name.is_valid()),
                issues: Self::issue_list(name),
            })
            .collect();
        if !rows.is_empty() {
            let _ = writeln!(out, "{}", Table::new(rows).with(TableStyle::rounded()));
        }
        let _ = writeln!(out, "{}", self.render_summary(&report.summary()));
        out.push('\n');
        out.push_str(&self.render_values(&report.values));
        out
    }

    /// Counts line for a batch of names.
    pub fn render_summary(&self, summary: &NameSummary) -> String {
        format!(
            "{} names checked: {} valid, {} with warnings, {} failing",
            summary.total,
            self.paint(&summary.valid.to_string(), Style::new().green()),
            self.paint(&summary.warnings.to_string(), Style::new().yellow()),
            self.paint(&summary.failures.to_string(), Style::new().red()),
        )
    }

    /// Table of inferred column metadata.
    pub fn render_metadata(&self, columns: &[ColumnMetadata]) -> String {
        let format_bound = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
        let rows: Vec<MetadataRow> = columns
            .iter()
            .map(|column| MetadataRow {
                name: column.name.clone(),
                ucd: column.ucd.clone().unwrap_or_else(|| "-".to_string()),
                min: format_bound(column.min),
                max: format_bound(column.max),
            })
            .collect();
        Table::new(rows).with(TableStyle::rounded()).to_string()
    }
}
