//! Store configuration
//!
//! Where the engine keeps its data and how the connection is set up.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Marker selecting an ephemeral in-memory database
pub const MEMORY_MARKER: &str = ":memory:";

/// Default busy timeout for file-backed databases
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Location of the engine's data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    /// Contents discarded when the session closes
    #[default]
    Memory,
    /// Database file on disk
    File(PathBuf),
}

impl Location {
    /// Location of a database file
    pub fn file(path: impl AsRef<Path>) -> Self {
        Location::File(path.as_ref().to_path_buf())
    }

    /// Check if this is the in-memory marker
    pub fn is_memory(&self) -> bool {
        matches!(self, Location::Memory)
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Location::from(s.to_string()))
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        if s == MEMORY_MARKER {
            Location::Memory
        } else {
            Location::File(PathBuf::from(s))
        }
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Memory => f.write_str(MEMORY_MARKER),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Where the data lives
    #[serde(default)]
    pub location: Location,
    /// How long the engine waits on a locked database, in milliseconds
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Enforce foreign key constraints
    #[serde(default)]
    pub foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: Location::Memory,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            foreign_keys: false,
        }
    }
}

impl StoreConfig {
    /// Create a new config for the given location with default values
    pub fn new(location: Location) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Config for an in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Set the busy timeout
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout_ms = timeout.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Enable or disable foreign key enforcement
    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    /// Busy timeout as a duration
    pub fn busy_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::Config(e.to_string()))
    }
}
