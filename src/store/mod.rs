//! Store module
//!
//! The schema-enforcing store, its sessions, configuration and value types.

pub mod config;
pub mod session;
pub mod store;
pub mod value;

pub use config::{Location, StoreConfig};
pub use session::{Session, SessionState};
pub use store::SchemaStore;
pub use value::{Row, Value};
