//! Storage layer for the expense tracker
//!
//! Expense records live in a single SQLite database; the settings file uses
//! JSON with atomic writes.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod schema;

pub use expenses::{ExpenseQuery, ExpenseRepository, GroupTotal};
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};

use std::path::Path;

use rusqlite::Connection;

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;

/// Main storage coordinator that owns the database connection
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open the database under the tracker's data directory
    pub fn new(paths: &TrackerPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;
        Self::open(paths.database_file())
    }

    /// Open (creating if needed) a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExpenseError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        schema::init_schema(&conn)?;

        tracing::debug!(path = %path.display(), "opened expense database");

        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, ExpenseError> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Access the expense repository
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }
}
