//! # weave-storage
//!
//! SQLite persistence layer for the Weave social graph: connection pool
//! (single writer + read pool, WAL), schema migrations, and the query
//! modules implementing the store traits.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use weave_core::errors::{StorageError, WeaveError};

/// Wrap a raw SQLite error message in the storage error type.
pub(crate) fn to_storage_err(message: String) -> WeaveError {
    WeaveError::StorageError(StorageError::SqliteError { message })
}
