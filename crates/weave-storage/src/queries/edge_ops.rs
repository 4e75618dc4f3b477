//! Follow-graph reads and the accept-path edge insert.

use rusqlite::{params, params_from_iter, Connection};

use weave_core::errors::WeaveResult;
use weave_core::graph::{ConnectionEdge, UserId};

use super::parse_timestamp;
use crate::to_storage_err;

/// Ids the given user follows, sorted by id.
pub fn following(conn: &Connection, id: &UserId) -> WeaveResult<Vec<UserId>> {
    id_column(
        conn,
        "SELECT followee_id FROM edges WHERE follower_id = ?1 ORDER BY followee_id",
        id,
    )
}

/// Ids following the given user, sorted by id.
pub fn followers(conn: &Connection, id: &UserId) -> WeaveResult<Vec<UserId>> {
    id_column(
        conn,
        "SELECT follower_id FROM edges WHERE followee_id = ?1 ORDER BY follower_id",
        id,
    )
}

/// Whether a follow edge exists for the ordered pair.
pub fn edge_exists(conn: &Connection, follower: &UserId, followee: &UserId) -> WeaveResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM edges WHERE follower_id = ?1 AND followee_id = ?2)",
            params![follower.0, followee.0],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(exists != 0)
}

/// Record an accepted follow relationship. Duplicate pairs are ignored.
pub fn insert_edge(conn: &Connection, follower: &UserId, followee: &UserId) -> WeaveResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO edges (follower_id, followee_id, created_at)
         VALUES (?1, ?2, ?3)",
        params![
            follower.0,
            followee.0,
            chrono::Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All outgoing edges of the given users (two-hop fan-out).
pub fn outgoing_edges_of(conn: &Connection, ids: &[UserId]) -> WeaveResult<Vec<ConnectionEdge>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = placeholders(1, ids.len());
    let sql = format!(
        "SELECT follower_id, followee_id, created_at FROM edges
         WHERE follower_id IN ({placeholders})
         ORDER BY follower_id, followee_id"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    query_edges(
        &mut stmt,
        params_from_iter(ids.iter().map(|id| id.0.clone())),
    )
}

/// Edges whose follower is in `sources` and whose followee is in `targets`.
pub fn edges_from_into(
    conn: &Connection,
    sources: &[UserId],
    targets: &[UserId],
) -> WeaveResult<Vec<ConnectionEdge>> {
    if sources.is_empty() || targets.is_empty() {
        return Ok(Vec::new());
    }
    let src_ph = placeholders(1, sources.len());
    let tgt_ph = placeholders(sources.len() + 1, targets.len());
    let sql = format!(
        "SELECT follower_id, followee_id, created_at FROM edges
         WHERE follower_id IN ({src_ph}) AND followee_id IN ({tgt_ph})
         ORDER BY followee_id, follower_id"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    query_edges(
        &mut stmt,
        params_from_iter(
            sources
                .iter()
                .chain(targets.iter())
                .map(|id| id.0.clone()),
        ),
    )
}

/// Build `?i, ?i+1, ...` placeholder lists starting at `start`.
fn placeholders(start: usize, n: usize) -> String {
    (start..start + n)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn id_column(conn: &Connection, sql: &str, id: &UserId) -> WeaveResult<Vec<UserId>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![id.0], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(UserId(row.map_err(|e| to_storage_err(e.to_string()))?));
    }
    Ok(results)
}

fn query_edges<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> WeaveResult<Vec<ConnectionEdge>> {
    let rows = stmt
        .query_map(params, |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (follower_id, followee_id, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(ConnectionEdge {
            follower_id: UserId(follower_id),
            followee_id: UserId(followee_id),
            created_at: parse_timestamp(&created_at)?,
        });
    }
    Ok(results)
}
