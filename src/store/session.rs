//! Scoped sessions
//!
//! A [`Session`] holds the store while its connection is open and releases
//! the connection when dropped, whichever way the scope is left.

use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::warn;

use super::store::SchemaStore;
use crate::error::Result;

/// Lifecycle of a store's connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Constructed, never opened
    Unopened,
    /// Connection acquired
    Active,
    /// Connection released
    Closed,
}

impl SessionState {
    /// Check if operations are permitted
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unopened => write!(f, "unopened"),
            SessionState::Active => write!(f, "active"),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}

/// Guard over an active store
///
/// Dereferences to the [`SchemaStore`]; dropping it closes the connection.
pub struct Session<'a> {
    store: &'a mut SchemaStore,
}

impl<'a> Session<'a> {
    pub(crate) fn new(store: &'a mut SchemaStore) -> Self {
        Self { store }
    }

    /// Close the session, reporting any error the engine raises on close
    pub fn close(self) -> Result<()> {
        // Drop runs afterwards and finds nothing left to release
        self.store.release()
    }
}

impl Deref for Session<'_> {
    type Target = SchemaStore;

    fn deref(&self) -> &SchemaStore {
        self.store
    }
}

impl DerefMut for Session<'_> {
    fn deref_mut(&mut self) -> &mut SchemaStore {
        self.store
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.store.release() {
            warn!(error = %e, "failed to close connection");
        }
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("location", self.store.location())
            .field("state", &self.store.state())
            .finish()
    }
}
