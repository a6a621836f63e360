//! Schema definitions for SchemaStore
//!
//! This module defines table schemas and column metadata.

use super::types::ColumnType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Column definition in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// Column type
    pub column_type: ColumnType,
}

impl ColumnSpec {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

impl<S: Into<String>> From<(S, ColumnType)> for ColumnSpec {
    fn from((name, column_type): (S, ColumnType)) -> Self {
        Self::new(name, column_type)
    }
}

/// Table schema - ordered columns plus the primary key column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Ordered list of columns
    columns: Vec<ColumnSpec>,
    /// Name of the primary key column
    primary_key: String,
}

impl TableSchema {
    /// Build a schema for `table`, checking that the column list is
    /// non-empty, names are unique and the primary key is one of them.
    pub fn new(
        table: &str,
        columns: Vec<ColumnSpec>,
        primary_key: impl Into<String>,
    ) -> Result<Self> {
        let primary_key = primary_key.into();

        if columns.is_empty() {
            return Err(Error::EmptySchema(table.to_string()));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(Error::DuplicateColumn {
                    table: table.to_string(),
                    column: col.name.clone(),
                });
            }
        }

        if !seen.contains(primary_key.as_str()) {
            return Err(Error::PrimaryKeyNotInSchema(primary_key));
        }

        Ok(Self {
            columns,
            primary_key,
        })
    }

    /// Get all columns
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get the primary key column name
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Check if a column is the primary key
    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_key == name
    }
}
