//! StorageEngine: owns the ConnectionPool, implements the profile, edge,
//! and request store traits, runs migrations on open.

use std::path::Path;

use weave_core::config::StorageConfig;
use weave_core::errors::WeaveResult;
use weave_core::graph::{ConnectionEdge, ConnectionRequest, RequestStatus, UserId, UserProfile};
use weave_core::traits::{IEdgeStore, IProfileStore, IRequestStore};

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and provides the full
/// profile + edge + request store interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> WeaveResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed storage engine with explicit configuration.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> WeaveResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    /// Routes all reads through the writer since in-memory read pool
    /// connections are isolated databases that can't see writer's changes.
    pub fn open_in_memory() -> WeaveResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations and verify pragmas.
    fn initialize(&self) -> WeaveResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer (read pool is isolated).
    fn with_reader<F, T>(&self, f: F) -> WeaveResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> WeaveResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IProfileStore for StorageEngine {
    fn get_profile(&self, id: &UserId) -> WeaveResult<Option<UserProfile>> {
        self.with_reader(|conn| crate::queries::profile_query::get_profile(conn, id))
    }

    fn get_profiles(&self, ids: &[UserId]) -> WeaveResult<Vec<UserProfile>> {
        self.with_reader(|conn| crate::queries::profile_query::bulk_get(conn, ids))
    }

    fn profiles_by_follower_range(
        &self,
        min: u64,
        max: u64,
        limit: usize,
    ) -> WeaveResult<Vec<UserProfile>> {
        self.with_reader(|conn| {
            crate::queries::profile_query::profiles_by_follower_range(conn, min, max, limit)
        })
    }

    fn recent_profiles(
        &self,
        location: Option<&str>,
        limit: usize,
    ) -> WeaveResult<Vec<UserProfile>> {
        self.with_reader(|conn| {
            crate::queries::profile_query::recent_profiles(conn, location, limit)
        })
    }

    fn profiles_by_location(
        &self,
        location: &str,
        limit: usize,
    ) -> WeaveResult<Vec<UserProfile>> {
        self.with_reader(|conn| {
            crate::queries::profile_query::profiles_by_location(conn, location, limit)
        })
    }

    fn upsert_profile(&self, profile: &UserProfile) -> WeaveResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::profile_query::upsert_profile(conn, profile))
    }
}

impl IEdgeStore for StorageEngine {
    fn following(&self, id: &UserId) -> WeaveResult<Vec<UserId>> {
        self.with_reader(|conn| crate::queries::edge_ops::following(conn, id))
    }

    fn followers(&self, id: &UserId) -> WeaveResult<Vec<UserId>> {
        self.with_reader(|conn| crate::queries::edge_ops::followers(conn, id))
    }

    fn edge_exists(&self, follower: &UserId, followee: &UserId) -> WeaveResult<bool> {
        self.with_reader(|conn| crate::queries::edge_ops::edge_exists(conn, follower, followee))
    }

    fn outgoing_edges_of(&self, ids: &[UserId]) -> WeaveResult<Vec<ConnectionEdge>> {
        self.with_reader(|conn| crate::queries::edge_ops::outgoing_edges_of(conn, ids))
    }

    fn edges_from_into(
        &self,
        sources: &[UserId],
        targets: &[UserId],
    ) -> WeaveResult<Vec<ConnectionEdge>> {
        self.with_reader(|conn| crate::queries::edge_ops::edges_from_into(conn, sources, targets))
    }

    fn insert_edge(&self, follower: &UserId, followee: &UserId) -> WeaveResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::edge_ops::insert_edge(conn, follower, followee))
    }
}

impl IRequestStore for StorageEngine {
    fn pending_targets_of(&self, id: &UserId) -> WeaveResult<Vec<UserId>> {
        self.with_reader(|conn| crate::queries::request_ops::pending_targets_of(conn, id))
    }

    fn requests_between(
        &self,
        user: &UserId,
        others: &[UserId],
    ) -> WeaveResult<Vec<ConnectionRequest>> {
        self.with_reader(|conn| crate::queries::request_ops::requests_between(conn, user, others))
    }

    fn insert_pending(&self, requester: &UserId, target: &UserId) -> WeaveResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::request_ops::insert_pending(conn, requester, target))
    }

    fn get_request(
        &self,
        requester: &UserId,
        target: &UserId,
    ) -> WeaveResult<Option<ConnectionRequest>> {
        self.with_reader(|conn| crate::queries::request_ops::get_request(conn, requester, target))
    }

    fn set_status(
        &self,
        requester: &UserId,
        target: &UserId,
        status: RequestStatus,
    ) -> WeaveResult<bool> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::request_ops::set_status(conn, requester, target, status)
        })
    }
}
