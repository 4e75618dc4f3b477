use crate::errors::WeaveResult;
use crate::graph::{ConnectionEdge, UserId};

/// Read access to the follow graph, plus the accept-path edge insert.
pub trait IEdgeStore: Send + Sync {
    /// Ids the given user follows.
    fn following(&self, id: &UserId) -> WeaveResult<Vec<UserId>>;

    /// Ids following the given user.
    fn followers(&self, id: &UserId) -> WeaveResult<Vec<UserId>>;

    fn edge_exists(&self, follower: &UserId, followee: &UserId) -> WeaveResult<bool>;

    /// All outgoing edges of the given users (two-hop fan-out).
    fn outgoing_edges_of(&self, ids: &[UserId]) -> WeaveResult<Vec<ConnectionEdge>>;

    /// Edges whose follower is in `sources` and whose followee is in
    /// `targets` (mutual-connection lookup for a candidate batch).
    fn edges_from_into(
        &self,
        sources: &[UserId],
        targets: &[UserId],
    ) -> WeaveResult<Vec<ConnectionEdge>>;

    /// Record an accepted follow relationship. Inserting an existing pair is
    /// a no-op (the pair is unique).
    fn insert_edge(&self, follower: &UserId, followee: &UserId) -> WeaveResult<()>;
}
