//! In-memory tables and their JSON loader.
//!
//! A table file is either
//!
//! ```json
//! { "name": "gama_sizes", "columns": { "ra": [10.2, 11.0], "dec": [-1.5, null] } }
//! ```
//!
//! or a bare `{ column: [values] }` object, in which case the table is named
//! after the file stem. Cells that are not numbers (strings, booleans) are
//! treated as nulls by the value checks.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::errors::{ColcheckError, Result, ResultExt};

/// A named table of nullable numeric columns, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: IndexMap<String, Vec<Option<f64>>>,
}

impl Table {
    /// Empty table called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexMap::new(),
        }
    }

    /// Append (or replace) a column.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        self.columns.insert(name.into(), values.into_iter().collect());
        self
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Values of the column called `name`.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Every column with its values, in table order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> + '_ {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Load a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading table from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColcheckError::io(format!("Failed to read table file: {}", path.display()), e)
        })?;
        let fallback = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "table".to_string());
        Self::from_json_str(&content, &fallback).with_context(|| path.display().to_string())
    }

    /// Parse a table from JSON text, naming it `fallback_name` when the
    /// document carries no name.
    pub fn from_json_str(content: &str, fallback_name: &str) -> Result<Self> {
        let document: TableDocument = serde_json::from_str(content)?;
        let (name, raw_columns) = match document {
            TableDocument::Named { name, columns } => {
                (name.unwrap_or_else(|| fallback_name.to_string()), columns)
            }
            TableDocument::Bare(columns) => (fallback_name.to_string(), columns),
        };

        let mut table = Table::new(name);
        for (column, cells) in raw_columns {
            let values: Vec<Option<f64>> = cells.iter().map(Value::as_f64).collect();
            let skipped = cells
                .iter()
                .zip(&values)
                .filter(|(cell, value)| value.is_none() && !cell.is_null())
                .count();
            if skipped > 0 {
                debug!("Column '{}': {} non-numeric cells ignored", column, skipped);
            }
            table.columns.insert(column, values);
        }

        if table.columns.is_empty() {
            return Err(ColcheckError::validation(format!(
                "Table '{}' has no columns",
                table.name
            )));
        }
        Ok(table)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Named {
        #[serde(default)]
        name: Option<String>,
        columns: IndexMap<String, Vec<Value>>,
    },
    Bare(IndexMap<String, Vec<Value>>),
}
