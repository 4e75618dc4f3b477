/// Weave system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of mutual-connection profiles returned per suggestion.
pub const MUTUAL_SAMPLE_CAP: usize = 3;

/// Generators fetch this multiple of the requested page size so that
/// exclusion pruning and enrichment still leave a full page.
pub const CANDIDATE_OVERFETCH_FACTOR: usize = 3;

/// Maximum batch size for bulk profile lookups.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;
