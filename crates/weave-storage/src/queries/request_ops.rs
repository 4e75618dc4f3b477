//! Connection-request reads, the pending insert, and status resolution.

use rusqlite::{params, params_from_iter, Connection};

use weave_core::errors::WeaveResult;
use weave_core::graph::{ConnectionRequest, RequestStatus, UserId};

use super::parse_timestamp;
use crate::to_storage_err;

const REQUEST_COLUMNS: &str = "id, requester_id, target_id, status, created_at";

/// Targets of the user's pending outgoing requests, sorted by id.
pub fn pending_targets_of(conn: &Connection, id: &UserId) -> WeaveResult<Vec<UserId>> {
    let mut stmt = conn
        .prepare(
            "SELECT target_id FROM requests
             WHERE requester_id = ?1 AND status = 'pending'
             ORDER BY target_id",
        )
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

/// All requests between the user and any of `others`, both directions,
/// any status.
pub fn requests_between(
    conn: &Connection,
    user: &UserId,
    others: &[UserId],
) -> WeaveResult<Vec<ConnectionRequest>> {
    if others.is_empty() {
        return Ok(Vec::new());
    }
    let out_ph = placeholders(2, others.len());
    let in_ph = placeholders(others.len() + 2, others.len());
    let sql = format!(
        "SELECT {REQUEST_COLUMNS} FROM requests
         WHERE (requester_id = ?1 AND target_id IN ({out_ph}))
            OR (target_id = ?1 AND requester_id IN ({in_ph}))
         ORDER BY created_at, id"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let values = std::iter::once(user.0.clone())
        .chain(others.iter().map(|id| id.0.clone()))
        .chain(others.iter().map(|id| id.0.clone()));
    query_requests(&mut stmt, params_from_iter(values))
}

/// Insert a new pending request for the ordered pair. Returns false when a
/// request for the pair already exists; the UNIQUE index is the arbiter, so
/// racing callers other than the winner observe false, never an error.
pub fn insert_pending(
    conn: &Connection,
    requester: &UserId,
    target: &UserId,
) -> WeaveResult<bool> {
    let request = ConnectionRequest::pending(requester.clone(), target.clone());
    let result = conn.execute(
        "INSERT INTO requests (id, requester_id, target_id, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            request.id,
            request.requester_id.0,
            request.target_id.0,
            status_str(request.status),
            request.created_at.to_rfc3339(),
        ],
    );
    match result {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(false)
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Resolve a request to a terminal (or back to pending) status. Returns
/// false when no request exists for the pair. Not called by the suggestion
/// engine; this is the accept/reject path of the surrounding application.
pub fn set_status(
    conn: &Connection,
    requester: &UserId,
    target: &UserId,
    status: RequestStatus,
) -> WeaveResult<bool> {
    let changed = conn
        .execute(
            "UPDATE requests SET status = ?3
             WHERE requester_id = ?1 AND target_id = ?2",
            params![requester.0, target.0, status_str(status)],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Fetch one request by ordered pair.
pub fn get_request(
    conn: &Connection,
    requester: &UserId,
    target: &UserId,
) -> WeaveResult<Option<ConnectionRequest>> {
    let sql = format!(
        "SELECT {REQUEST_COLUMNS} FROM requests
         WHERE requester_id = ?1 AND target_id = ?2"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = query_requests(&mut stmt, params![requester.0, target.0])?;
    Ok(rows.pop())
}

fn placeholders(start: usize, n: usize) -> String {
    (start..start + n)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_str(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "pending",
        RequestStatus::Accepted => "accepted",
        RequestStatus::Rejected => "rejected",
    }
}

fn parse_status(raw: &str) -> WeaveResult<RequestStatus> {
    serde_json::from_str(&format!("\"{raw}\""))
        .map_err(|e| to_storage_err(format!("parse request status {raw:?}: {e}")))
}

fn query_requests<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> WeaveResult<Vec<ConnectionRequest>> {
    let rows = stmt
        .query_map(params, |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (id, requester_id, target_id, status, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(ConnectionRequest {
            id,
            requester_id: UserId(requester_id),
            target_id: UserId(target_id),
            status: parse_status(&status)?,
            created_at: parse_timestamp(&created_at)?,
        });
    }
    Ok(results)
}
