//! Range and sentinel checks on column data.

pub mod config;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::status::Status;
use crate::io::table::Table;

pub use config::{ClosedInterval, RangeRule, ValueChecksConfig};

/// Outcome of one range rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeOutcome {
    /// Root token of the rule
    pub root: String,
    /// Column the rule was applied to, if one was found
    pub column: Option<String>,
    /// Allowed interval, e.g. `[0, 360)`
    pub interval: String,
    /// Outcome of the rule
    pub status: Status,
}

/// Data-value report for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValueReport {
    /// Table the checks ran on
    pub table_name: String,
    /// One outcome per configured range rule
    pub ranges: Vec<RangeOutcome>,
    /// Sentinel check outcome
    pub sentinel: Status,
    /// Columns containing the sentinel value
    pub sentinel_columns: Vec<String>,
    /// Every range rule and the sentinel check passed
    pub valid: bool,
}

impl DataValueReport {
    fn new(
        table_name: String,
        ranges: Vec<RangeOutcome>,
        sentinel: Status,
        sentinel_columns: Vec<String>,
    ) -> Self {
        let valid = sentinel.is_pass() && ranges.iter().all(|range| range.status.is_pass());
        Self {
            table_name,
            ranges,
            sentinel,
            sentinel_columns,
            valid,
        }
    }
}

/// Find the first column with a `_`-token equal to `root`, so `ra` locates
/// `ra_j2000` but not `radius`.
pub fn find_column<'a>(root: &str, columns: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    columns
        .into_iter()
        .find(|column| column.split('_').any(|token| token == root))
}

/// Applies the configured range rules and sentinel check to a table.
#[derive(Debug, Clone, Default)]
pub struct ValueValidator {
    config: ValueChecksConfig,
}

impl ValueValidator {
    /// Validator applying `config`.
    pub fn new(config: ValueChecksConfig) -> Self {
        Self { config }
    }

    /// Active value-check configuration.
    pub fn config(&self) -> &ValueChecksConfig {
        &self.config
    }

    /// Run every range rule and the sentinel check.
    pub fn validate(&self, table: &Table) -> DataValueReport {
        let ranges = self
            .config
            .ranges
            .iter()
            .map(|rule| self.check_range(table, rule))
            .collect();
        let (sentinel, sentinel_columns) = self.check_sentinel(table);
        DataValueReport::new(table.name().to_string(), ranges, sentinel, sentinel_columns)
    }

    /// Every non-null value of the rule's column must lie in its interval.
    pub fn check_range(&self, table: &Table, rule: &RangeRule) -> RangeOutcome {
        let interval = rule.closed.describe(rule.min, rule.max);

        let column = match &rule.column {
            Some(column) => Some(column.as_str()),
            None => find_column(&rule.root, table.column_names()),
        };
        let Some(column) = column else {
            debug!("No '{}' column in table '{}'", rule.root, table.name());
            return RangeOutcome {
                root: rule.root.clone(),
                column: None,
                interval,
                status: Status::pass_with(format!("no column matching '{}'", rule.root)),
            };
        };

        let status = match table.column(column) {
            None => Status::fail(format!("column '{column}' not found")),
            Some(values) => {
                let outside = values
                    .iter()
                    .flatten()
                    .filter(|value| !rule.closed.contains(**value, rule.min, rule.max))
                    .count();
                if outside == 0 {
                    Status::pass()
                } else {
                    debug!("'{}': {} values outside {}", column, outside, interval);
                    Status::fail(format!("{outside} values outside {interval}"))
                }
            }
        };

        RangeOutcome {
            root: rule.root.clone(),
            column: Some(column.to_string()),
            interval,
            status,
        }
    }

    /// No column may contain the sentinel placeholder.
    pub fn check_sentinel(&self, table: &Table) -> (Status, Vec<String>) {
        let sentinel = self.config.sentinel;
        let offending: Vec<String> = table
            .columns()
            .filter(|(_, values)| values.iter().flatten().any(|value| *value == sentinel))
            .map(|(name, _)| name.to_string())
            .collect();

        if offending.is_empty() {
            (Status::pass(), offending)
        } else {
            let message = format!("{} found in: {}", sentinel, offending.join(", "));
            (Status::fail(message), offending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::State;

    fn table() -> Table {
        Table::new("gama")
            .with_column("uberID", [Some(1.0), Some(2.0), Some(3.0)])
            .with_column("ra_j2000", [Some(0.0), Some(359.9), None])
            .with_column("dec", [Some(-90.0), Some(90.0), Some(12.5)])
            .with_column("radius", [Some(400.0), Some(1.0), Some(2.0)])
    }

    #[test]
    fn test_find_column_matches_whole_tokens() {
        let columns = ["radius", "ra_j2000", "dec"];
        assert_eq!(find_column("ra", columns), Some("ra_j2000"));
        assert_eq!(find_column("dec", columns), Some("dec"));
        assert_eq!(find_column("vel", columns), None);
    }

    #[test]
    fn test_valid_table() {
        let report = ValueValidator::default().validate(&table());
        assert!(report.valid);
        assert_eq!(report.ranges[0].column.as_deref(), Some("ra_j2000"));
        assert_eq!(report.ranges[0].interval, "[0, 360)");
        assert_eq!(report.ranges[1].column.as_deref(), Some("dec"));
        assert!(report.sentinel_columns.is_empty());
    }

    #[test]
    fn test_ra_upper_bound_is_open() {
        let table = Table::new("t").with_column("ra", [Some(360.0), Some(10.0)]);
        let report = ValueValidator::default().validate(&table);
        let ra = &report.ranges[0];
        assert_eq!(ra.status.state(), State::Fail);
        assert_eq!(ra.status.message(), Some("1 values outside [0, 360)"));
        assert!(!report.valid);
    }

    #[test]
    fn test_missing_column_passes_with_message() {
        let table = Table::new("t").with_column("flux", [Some(1.0)]);
        let report = ValueValidator::default().validate(&table);
        assert!(report.valid);
        assert_eq!(report.ranges[0].column, None);
        assert_eq!(
            report.ranges[0].status.message(),
            Some("no column matching 'ra'")
        );
    }

    #[test]
    fn test_explicit_column_override() {
        let config = ValueChecksConfig {
            ranges: vec![
                RangeRule::new("ra", 0.0, 360.0, ClosedInterval::Left).with_column("alpha"),
            ],
            ..Default::default()
        };
        let validator = ValueValidator::new(config);

        let table = Table::new("t").with_column("alpha", [Some(-1.0)]);
        assert_eq!(validator.validate(&table).ranges[0].status.state(), State::Fail);

        let table = Table::new("t").with_column("ra", [Some(1.0)]);
        let outcome = &validator.validate(&table).ranges[0];
        assert_eq!(outcome.status.message(), Some("column 'alpha' not found"));
    }

    #[test]
    fn test_sentinel_lists_offending_columns() {
        let table = table()
            .with_column("mag", [Some(-999.0), Some(20.1), None])
            .with_column("z", [Some(0.1), Some(-999.0), Some(0.3)]);
        let report = ValueValidator::default().validate(&table);
        assert!(!report.valid);
        assert_eq!(report.sentinel_columns, vec!["mag", "z"]);
        assert_eq!(report.sentinel.message(), Some("-999 found in: mag, z"));
    }

    #[test]
    fn test_nulls_are_ignored() {
        let table = Table::new("t")
            .with_column("ra", [None, None])
            .with_column("dec", [None]);
        assert!(ValueValidator::default().validate(&table).valid);
    }
}
