//! Column types for SchemaStore
//!
//! This module defines the closed set of column types the engine stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::store::Value;

/// Column type of a table schema
///
/// Each variant knows the keyword the engine expects in a column
/// declaration and which [`Value`]s belong to its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// Absence of a value
    Null,
    /// Signed 64-bit integer
    Integer,
    /// 64-bit floating point
    Real,
    /// UTF-8 text
    Text,
    /// Raw bytes
    Blob,
}

impl ColumnType {
    /// All column types, in declaration order
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Null,
        ColumnType::Integer,
        ColumnType::Real,
        ColumnType::Text,
        ColumnType::Blob,
    ];

    /// Keyword used in the engine's column declaration
    pub fn keyword(&self) -> &'static str {
        match self {
            ColumnType::Null => "NULL",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Blob => "BLOB",
        }
    }

    /// Check whether a value belongs to this type's domain.
    ///
    /// The check is strict: an integer is not a real, and NULL only
    /// satisfies a `Null` column. NaN is refused because the engine stores
    /// it as NULL.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ColumnType::Real, Value::Real(f)) => !f.is_nan(),
            (ColumnType::Null, Value::Null)
            | (ColumnType::Integer, Value::Integer(_))
            | (ColumnType::Text, Value::Text(_))
            | (ColumnType::Blob, Value::Blob(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}
