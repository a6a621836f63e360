//! Error types for SchemaStore
//!
//! This module defines all error types used throughout the store.

use thiserror::Error;

use crate::catalog::ColumnType;
use crate::store::SessionState;

/// The main error type for SchemaStore
#[derive(Error, Debug)]
pub enum Error {
    // ========== Schema Errors ==========
    #[error("Schema error: the provided primary key '{0}' must be part of the schema")]
    PrimaryKeyNotInSchema(String),

    #[error("Schema error: table '{0}' must declare at least one column")]
    EmptySchema(String),

    #[error("Schema error: column '{column}' is declared more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("Schema error: table '{table}' expects items with {expected} values, got {found}")]
    ArityMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("Schema error: column '{column}' expects values of type {expected}, got {found}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        found: &'static str,
    },

    // ========== Catalog Errors ==========
    #[error("Catalog error: table '{0}' not found")]
    TableNotFound(String),

    // ========== Session Errors ==========
    #[error("Session error: store is {0}, operations require an active session")]
    NotActive(SessionState),

    #[error("Session error: store already has an active session")]
    AlreadyActive,

    // ========== Engine Errors ==========
    #[error("Engine error: {0}")]
    Engine(#[from] rusqlite::Error),

    // ========== Type Errors ==========
    #[error("Type error: unknown column type '{0}'")]
    UnknownType(String),

    // ========== Configuration Errors ==========
    #[error("Config error: {0}")]
    Config(String),

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // ========== Internal Errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for shape and type violations caught before anything reaches the engine
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::PrimaryKeyNotInSchema(_)
                | Error::EmptySchema(_)
                | Error::DuplicateColumn { .. }
                | Error::ArityMismatch { .. }
                | Error::TypeMismatch { .. }
        )
    }

    /// True when the session lifecycle was not respected
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::NotActive(_) | Error::AlreadyActive)
    }
}

/// Result type alias for SchemaStore operations
pub type Result<T> = std::result::Result<T, Error>;
