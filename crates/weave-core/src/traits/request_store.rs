use crate::errors::WeaveResult;
use crate::graph::{ConnectionRequest, RequestStatus, UserId};

/// Access to connection requests. The only engine-driven mutation is
/// `insert_pending`.
pub trait IRequestStore: Send + Sync {
    /// Targets of the user's pending outgoing requests.
    fn pending_targets_of(&self, id: &UserId) -> WeaveResult<Vec<UserId>>;

    /// All requests between the user and any of `others`, in both
    /// directions, any status.
    fn requests_between(
        &self,
        user: &UserId,
        others: &[UserId],
    ) -> WeaveResult<Vec<ConnectionRequest>>;

    /// Insert a new pending request. Returns false when a request for the
    /// ordered pair already exists (uniqueness is enforced by the store;
    /// racing inserts lose quietly rather than erroring).
    fn insert_pending(&self, requester: &UserId, target: &UserId) -> WeaveResult<bool>;

    /// Fetch one request by ordered pair.
    fn get_request(
        &self,
        requester: &UserId,
        target: &UserId,
    ) -> WeaveResult<Option<ConnectionRequest>>;

    /// Resolve a request (accept/reject path of the surrounding app; the
    /// suggestion engine never calls this). Returns false when no request
    /// exists for the pair.
    fn set_status(
        &self,
        requester: &UserId,
        target: &UserId,
        status: RequestStatus,
    ) -> WeaveResult<bool>;
}
