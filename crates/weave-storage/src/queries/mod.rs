//! Query modules behind the store traits.

pub mod edge_ops;
pub mod profile_query;
pub mod request_ops;

use chrono::{DateTime, Utc};

use weave_core::errors::WeaveResult;

use crate::to_storage_err;

/// SQL predicate selecting only profiles that may be suggested: onboarding
/// has produced both a handle and a display name.
pub(crate) const SUGGESTIBLE: &str = "handle IS NOT NULL AND handle != '' \
     AND display_name IS NOT NULL AND display_name != ''";

/// Parse an RFC 3339 timestamp column.
pub(crate) fn parse_timestamp(raw: &str) -> WeaveResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse timestamp {raw:?}: {e}")))
}
