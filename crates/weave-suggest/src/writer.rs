//! The single mutation path: create a pending connection request.
//!
//! Every precondition miss is a quiet no-op (false), never an error: the
//! caller learns "nothing happened" and no dialog-worthy failure occurs.

use tracing::{debug, info};

use weave_core::errors::WeaveResult;
use weave_core::graph::UserId;

use crate::engine::SuggestionEngine;

impl SuggestionEngine<'_> {
    /// Send a connection request from `requester` to `target`.
    ///
    /// Returns false when the request cannot be created: self-request, an
    /// edge already exists, or a request already exists in either direction,
    /// any status (a rejected request suppresses re-requests). The store's
    /// uniqueness constraint arbitrates racing calls, so concurrent senders
    /// for the same pair see exactly one true.
    pub fn send_connection_request(
        &self,
        requester: &UserId,
        target: &UserId,
    ) -> WeaveResult<bool> {
        if requester == target {
            return Ok(false);
        }
        if self.edges.edge_exists(requester, target)? {
            debug!(%requester, %target, "already connected, not sending");
            return Ok(false);
        }
        if !self
            .requests
            .requests_between(requester, std::slice::from_ref(target))?
            .is_empty()
        {
            debug!(%requester, %target, "request already on record, not sending");
            return Ok(false);
        }

        let inserted = self.requests.insert_pending(requester, target)?;
        if inserted {
            info!(%requester, %target, "connection request created");
        } else {
            debug!(%requester, %target, "lost insert race, request already exists");
        }
        Ok(inserted)
    }
}
