//! Profile upsert and filtered reads.

use rusqlite::{params, Connection};

use weave_core::constants::MAX_BULK_BATCH_SIZE;
use weave_core::errors::WeaveResult;
use weave_core::graph::{UserId, UserProfile};

use super::{parse_timestamp, SUGGESTIBLE};
use crate::to_storage_err;

const PROFILE_COLUMNS: &str = "id, handle, display_name, bio, avatar_url, location, \
     verified, follower_count, following_count, created_at";

/// Insert or replace a profile.
pub fn upsert_profile(conn: &Connection, profile: &UserProfile) -> WeaveResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO profiles (
            id, handle, display_name, bio, avatar_url, location,
            verified, follower_count, following_count, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            profile.id.0,
            profile.handle,
            profile.display_name,
            profile.bio,
            profile.avatar_url,
            profile.location,
            profile.verified as i32,
            profile.follower_count,
            profile.following_count,
            profile.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch a single profile by id.
pub fn get_profile(conn: &Connection, id: &UserId) -> WeaveResult<Option<UserProfile>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = query_profiles(&mut stmt, params![id.0])?;
    Ok(rows.pop())
}

/// Batch lookup. Missing ids are dropped; chunked to bound statement size.
pub fn bulk_get(conn: &Connection, ids: &[UserId]) -> WeaveResult<Vec<UserProfile>> {
    let mut results = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(MAX_BULK_BATCH_SIZE) {
        let placeholders = placeholders(chunk.len());
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id IN ({placeholders})");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| to_storage_err(e.to_string()))?;
        let chunk_rows = query_profiles(
            &mut stmt,
            rusqlite::params_from_iter(chunk.iter().map(|id| id.0.clone())),
        )?;
        results.extend(chunk_rows);
    }
    Ok(results)
}

/// Suggestible profiles with follower_count in the inclusive range,
/// most-followed first.
pub fn profiles_by_follower_range(
    conn: &Connection,
    min: u64,
    max: u64,
    limit: usize,
) -> WeaveResult<Vec<UserProfile>> {
    let sql = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles
         WHERE {SUGGESTIBLE} AND follower_count >= ?1 AND follower_count <= ?2
         ORDER BY follower_count DESC, id ASC
         LIMIT ?3"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    query_profiles(&mut stmt, params![min, max, limit as i64])
}

/// Suggestible profiles, newest accounts first, optionally filtered by a
/// location substring.
pub fn recent_profiles(
    conn: &Connection,
    location: Option<&str>,
    limit: usize,
) -> WeaveResult<Vec<UserProfile>> {
    match location {
        Some(loc) => {
            let sql = format!(
                "SELECT {PROFILE_COLUMNS} FROM profiles
                 WHERE {SUGGESTIBLE} AND location LIKE '%' || ?1 || '%'
                 ORDER BY created_at DESC, id ASC
                 LIMIT ?2"
            );
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| to_storage_err(e.to_string()))?;
            query_profiles(&mut stmt, params![loc, limit as i64])
        }
        None => {
            let sql = format!(
                "SELECT {PROFILE_COLUMNS} FROM profiles
                 WHERE {SUGGESTIBLE}
                 ORDER BY created_at DESC, id ASC
                 LIMIT ?1"
            );
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| to_storage_err(e.to_string()))?;
            query_profiles(&mut stmt, params![limit as i64])
        }
    }
}

/// Suggestible profiles whose location contains the given substring,
/// most-followed first.
pub fn profiles_by_location(
    conn: &Connection,
    location: &str,
    limit: usize,
) -> WeaveResult<Vec<UserProfile>> {
    let sql = format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles
         WHERE {SUGGESTIBLE} AND location LIKE '%' || ?1 || '%'
         ORDER BY follower_count DESC, id ASC
         LIMIT ?2"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    query_profiles(&mut stmt, params![location, limit as i64])
}

fn placeholders(n: usize) -> String {
    (1..=n).map(|i| format!("?{i}")).collect::<Vec<_>>().join(", ")
}

/// Run a prepared profile SELECT and map rows to models.
fn query_profiles<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> WeaveResult<Vec<UserProfile>> {
    let rows = stmt
        .query_map(params, |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, i64>(6)?,
                row.get::<_, i64>(7)?,
                row.get::<_, i64>(8)?,
                row.get::<_, String>(9)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (
            id,
            handle,
            display_name,
            bio,
            avatar_url,
            location,
            verified,
            follower_count,
            following_count,
            created_at,
        ) = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(UserProfile {
            id: UserId(id),
            handle,
            display_name,
            bio,
            avatar_url,
            location,
            verified: verified != 0,
            follower_count: follower_count.max(0) as u64,
            following_count: following_count.max(0) as u64,
            created_at: parse_timestamp(&created_at)?,
        });
    }
    Ok(results)
}
