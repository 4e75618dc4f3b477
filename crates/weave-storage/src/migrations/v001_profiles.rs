//! v001: profiles.

use rusqlite::Connection;

use weave_core::errors::WeaveResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> WeaveResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS profiles (
            id              TEXT PRIMARY KEY,
            handle          TEXT,
            display_name    TEXT,
            bio             TEXT,
            avatar_url      TEXT,
            location        TEXT,
            verified        INTEGER NOT NULL DEFAULT 0,
            follower_count  INTEGER NOT NULL DEFAULT 0,
            following_count INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_profiles_follower_count ON profiles(follower_count);
        CREATE INDEX IF NOT EXISTS idx_profiles_created_at ON profiles(created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
