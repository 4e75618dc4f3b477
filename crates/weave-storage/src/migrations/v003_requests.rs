//! v003: requests. At most one row exists per ordered (requester, target)
//! pair; racing inserts are arbitrated by the UNIQUE constraint.

use rusqlite::Connection;

use weave_core::errors::WeaveResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> WeaveResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS requests (
            id           TEXT PRIMARY KEY,
            requester_id TEXT NOT NULL,
            target_id    TEXT NOT NULL,
            status       TEXT NOT NULL DEFAULT 'pending',
            created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (requester_id, target_id)
        );

        CREATE INDEX IF NOT EXISTS idx_requests_requester ON requests(requester_id);
        CREATE INDEX IF NOT EXISTS idx_requests_target ON requests(target_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
