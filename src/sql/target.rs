//! Target filters
//!
//! A target narrows an operation to the rows where one column compares
//! against one value.

use crate::store::Value;
use std::fmt;

/// Operator a two-element target is normalized to
pub const EQUALITY: &str = "=";

/// Single-column filter: `column operator value`
///
/// The operator text is handed to the engine as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    column: String,
    operator: String,
    value: Value,
}

impl Target {
    /// Create a target with an explicit comparison operator
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Create an equality target
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, EQUALITY, value)
    }

    /// Column the filter applies to
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Comparison operator
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Value compared against
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Check if this is an equality comparison
    pub fn is_equality(&self) -> bool {
        self.operator.trim() == EQUALITY
    }
}

impl<C, V> From<(C, V)> for Target
where
    C: Into<String>,
    V: Into<Value>,
{
    fn from((column, value): (C, V)) -> Self {
        Self::equals(column, value)
    }
}

impl<C, O, V> From<(C, O, V)> for Target
where
    C: Into<String>,
    O: Into<String>,
    V: Into<Value>,
{
    fn from((column, operator, value): (C, O, V)) -> Self {
        Self::new(column, operator, value)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}
