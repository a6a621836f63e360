//! Schema catalog for SchemaStore
//!
//! This module keeps the schemas recorded by successful table creations.

use super::schema::TableSchema;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Schema catalog - table schemas keyed by table name, in creation order
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    tables: IndexMap<String, TableSchema>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the schema of a table, returning the entry it replaced
    pub fn register(&mut self, name: &str, schema: TableSchema) -> Option<TableSchema> {
        self.tables.insert(name.to_string(), schema)
    }

    /// Get a table schema by name
    pub fn get(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Check if a table has a recorded schema
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// List all table names in creation order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Number of recorded tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if no table has been recorded
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get table schema info as a formatted string (for the .schema command)
    pub fn describe(&self, name: &str) -> Result<String> {
        let schema = self.get(name)?;
        let mut info = format!("Table: {}\n", name);
        info.push_str("Columns:\n");

        for col in schema.columns() {
            let flags = if schema.is_primary_key(&col.name) {
                " [PRIMARY KEY]"
            } else {
                ""
            };
            info.push_str(&format!("  {} {}{}\n", col.name, col.column_type, flags));
        }

        Ok(info)
    }
}
