//! Deterministic ordering and pagination over scored suggestions.

pub mod scorer;

use weave_core::models::Suggestion;

/// Sort by relevance score descending; ties break by candidate id
/// ascending so identical inputs always produce identical output.
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.profile.id.cmp(&b.profile.id))
    });
}

/// Apply `[offset, offset + limit)` and report whether more rows remain.
pub fn paginate(
    suggestions: Vec<Suggestion>,
    offset: usize,
    limit: usize,
) -> (Vec<Suggestion>, bool) {
    let has_more = suggestions.len() > offset + limit;
    let page = suggestions.into_iter().skip(offset).take(limit).collect();
    (page, has_more)
}
