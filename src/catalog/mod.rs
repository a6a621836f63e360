//! Catalog module
//!
//! This module contains the schema catalog, schema definitions, and column types.

pub mod catalog;
pub mod schema;
pub mod types;

pub use catalog::Catalog;
pub use schema::{ColumnSpec, TableSchema};
pub use types::ColumnType;
