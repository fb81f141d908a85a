//! Dataset-level validation results.

use serde::Serialize;

use crate::core::status::State;
use crate::detectors::names::{CheckKind, NameReport};
use crate::detectors::values::DataValueReport;

/// Combined column-name and data-value report for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    /// Table name
    pub table_name: String,
    /// One report per column, in column order
    pub column_names: Vec<NameReport>,
    /// Range and sentinel checks
    pub values: DataValueReport,
    /// Every column name is compliant
    pub valid_column_names: bool,
    /// Every data-value check passed
    pub valid_data: bool,
    /// Both of the above
    pub valid: bool,
}

impl DatasetReport {
    /// Assemble a report and derive its verdicts.
    pub fn new(table_name: String, column_names: Vec<NameReport>, values: DataValueReport) -> Self {
        let valid_column_names = column_names.iter().all(NameReport::is_valid);
        let valid_data = values.valid;
        Self {
            table_name,
            column_names,
            values,
            valid_column_names,
            valid_data,
            valid: valid_column_names && valid_data,
        }
    }

    /// Summary counts for the column-name checks.
    pub fn summary(&self) -> NameSummary {
        NameSummary::from_reports(&self.column_names)
    }
}

/// Counts over a batch of name reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameSummary {
    /// Names checked
    pub total: usize,
    /// Names passing every dimension
    pub valid: usize,
    /// Names whose worst result is a warning
    pub warnings: usize,
    /// Names with at least one failure
    pub failures: usize,
    /// Non-passing results per dimension, in report order
    pub issues_by_check: Vec<(CheckKind, usize)>,
}

impl NameSummary {
    /// Tally `reports`.
    pub fn from_reports(reports: &[NameReport]) -> Self {
        let mut summary = NameSummary {
            total: reports.len(),
            issues_by_check: CheckKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
            ..Default::default()
        };

        for report in reports {
            match report.worst_state() {
                State::Pass => summary.valid += 1,
                State::Warning => summary.warnings += 1,
                State::Fail => summary.failures += 1,
            }
            for (kind, _) in report.issues() {
                if let Some(entry) = summary.issues_by_check.iter_mut().find(|(k, _)| *k == kind) {
                    entry.1 += 1;
                }
            }
        }

        summary
    }
}
