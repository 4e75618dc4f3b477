//! Schema migrations, applied in order and tracked via `PRAGMA user_version`.

pub mod v001_profiles;
pub mod v002_edges;
pub mod v003_requests;

use rusqlite::Connection;

use weave_core::errors::{StorageError, WeaveError, WeaveResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> WeaveResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_profiles::migrate),
    (2, v002_edges::migrate),
    (3, v003_requests::migrate),
];

/// Run all pending migrations on the given connection.
pub fn run_migrations(conn: &Connection) -> WeaveResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn).map_err(|e| {
            WeaveError::StorageError(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}

/// Current schema version of the given database.
pub fn schema_version(conn: &Connection) -> WeaveResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
