//! v002: edges (directed follow relationships).

use rusqlite::Connection;

use weave_core::errors::WeaveResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> WeaveResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS edges (
            follower_id TEXT NOT NULL,
            followee_id TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (follower_id, followee_id)
        );

        CREATE INDEX IF NOT EXISTS idx_edges_follower ON edges(follower_id);
        CREATE INDEX IF NOT EXISTS idx_edges_followee ON edges(followee_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
