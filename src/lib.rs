//! SchemaStore - a schema-enforcing wrapper around an embedded SQLite database
//!
//! This library provides:
//! - Column types and table schemas (catalog)
//! - A store that validates row shape and types before the engine sees them
//! - Scoped sessions that always release their connection
//! - Statement building and target filters
//! - Table and JSON rendering of selected rows
//!
//! ```
//! use schemastore::{row, ColumnType, SchemaStore};
//!
//! let mut store = SchemaStore::in_memory();
//! let mut session = store.open()?;
//!
//! session.create(
//!     "ninjas",
//!     [("ninja", ColumnType::Text), ("bitecoins", ColumnType::Integer)],
//!     "ninja",
//! )?;
//! session.insert("ninjas", vec![row!["taspotts", 906], row!["Tomade", 896]])?;
//!
//! let rows = session.select("ninjas", None, Some(("ninja", "taspotts").into()))?;
//! assert_eq!(rows, vec![row!["taspotts", 906]]);
//! # Ok::<(), schemastore::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod sql;
pub mod store;

pub use catalog::{ColumnSpec, ColumnType, TableSchema};
pub use error::{Error, Result};
pub use sql::Target;
pub use store::{Location, Row, SchemaStore, Session, SessionState, StoreConfig, Value};
