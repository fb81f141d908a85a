//! Main validation engine.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::api::results::DatasetReport;
use crate::core::config::ColcheckConfig;
use crate::core::errors::Result;
use crate::detectors::names::{NameReport, NameValidator};
use crate::detectors::ucd::{describe_columns, guess_ucd, ColumnMetadata};
use crate::detectors::values::{DataValueReport, ValueValidator};
use crate::io::table::Table;
use crate::lexicon::Lexicon;

/// Validates column names and table data against one lexicon and config.
#[derive(Debug, Clone)]
pub struct DatasetValidator {
    names: NameValidator,
    values: ValueValidator,
    config: Arc<ColcheckConfig>,
}

impl DatasetValidator {
    /// Create an engine; the configuration is validated first.
    pub fn new(lexicon: Lexicon, config: ColcheckConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing validator: {} filters, {} protected words, {} banned words",
            lexicon.filters().len(),
            lexicon.protected_words().len(),
            lexicon.banned_words().len()
        );

        Ok(Self {
            names: NameValidator::new(Arc::new(lexicon), config.naming.clone()),
            values: ValueValidator::new(config.values.clone()),
            config: Arc::new(config),
        })
    }

    /// Load the lexicon named by `config`, or the bundled one.
    pub fn from_config(config: ColcheckConfig) -> Result<Self> {
        let lexicon = match &config.lexicon {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::bundled()?,
        };
        Self::new(lexicon, config)
    }

    /// Engine with the bundled lexicon and default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Lexicon::bundled()?, ColcheckConfig::default())
    }

    /// Lexicon shared by every name check.
    pub fn lexicon(&self) -> &Lexicon {
        self.names.lexicon()
    }

    /// Active configuration.
    pub fn config(&self) -> &ColcheckConfig {
        &self.config
    }

    /// Check a single column name.
    pub fn validate_name(&self, name: &str) -> NameReport {
        self.names.validate(name)
    }

    /// Check many names in parallel, preserving order.
    pub fn validate_names<S>(&self, names: &[S]) -> Vec<NameReport>
    where
        S: AsRef<str> + Sync,
    {
        self.names.validate_all(names)
    }

    /// Run the range and sentinel checks on a table.
    pub fn validate_values(&self, table: &Table) -> DataValueReport {
        self.values.validate(table)
    }

    /// Check every column name and the data of `table`.
    pub fn validate_table(&self, table: &Table) -> DatasetReport {
        info!("Validating table '{}' ({} columns)", table.name(), table.column_count());
        let names: Vec<&str> = table.column_names().collect();
        let column_names = self.validate_names(&names);
        let values = self.validate_values(table);
        DatasetReport::new(table.name().to_string(), column_names, values)
    }

    /// Load a JSON table from disk and validate it.
    pub fn validate_table_file(&self, path: impl AsRef<Path>) -> Result<DatasetReport> {
        let table = Table::from_json_file(path)?;
        Ok(self.validate_table(&table))
    }

    /// Guess the UCD of a column name from the lexicon.
    pub fn guess_ucd(&self, name: &str) -> Option<String> {
        guess_ucd(name, self.lexicon())
    }

    /// Infer UCDs and value ranges for every column of `table`.
    pub fn describe_columns(&self, table: &Table) -> Vec<ColumnMetadata> {
        describe_columns(table, self.lexicon())
    }
}
