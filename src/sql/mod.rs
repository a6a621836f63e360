//! SQL module
//!
//! Target filters and the statement text sent to the engine.

pub mod builder;
pub mod target;

pub use target::Target;
