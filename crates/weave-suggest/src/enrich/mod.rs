//! Enrichment passes over a fixed candidate batch. Both are independent of
//! each other and skip on an empty batch; a failure in either degrades the
//! call (candidates proceed unenriched) rather than failing it.

pub mod mutuals;
pub mod requests;

pub use mutuals::MutualConnections;
pub use requests::RequestState;
