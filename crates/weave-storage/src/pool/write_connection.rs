//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use weave_core::errors::{StorageError, WeaveError, WeaveResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Exactly one write connection exists per database; all writes funnel
/// through it, so write ordering is serialized by construction.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database path.
    pub fn open(path: &Path) -> WeaveResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> WeaveResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> WeaveResult<T>
    where
        F: FnOnce(&Connection) -> WeaveResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            WeaveError::StorageError(StorageError::PoolPoisoned {
                message: e.to_string(),
            })
        })?;
        f(&guard)
    }
}
