pub mod models;

#[cfg(test)]
pub(crate) mod fixtures;

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::error::Result;

/// Read-only handle to the show archive.
///
/// One handle owns one connection; concurrent callers each open their own.
/// Pooling, timeouts, and cancellation belong to the caller's connection
/// layer, not here.
pub struct Database {
    pub conn: Connection,
}

impl Database {
    /// Open the archive read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Adopt an already-open connection supplied by the caller.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}
