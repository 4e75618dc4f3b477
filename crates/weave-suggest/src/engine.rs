//! SuggestionEngine: orchestrates the full pipeline.
//!
//! exclusion set → one generator → enrichment (mutuals + request status) →
//! scoring → deterministic sort → pagination. The whole path is read-only;
//! the request writer lives in [`crate::writer`].

use chrono::Utc;
use tracing::{debug, info, warn};

use weave_core::config::SuggestConfig;
use weave_core::constants::CANDIDATE_OVERFETCH_FACTOR;
use weave_core::errors::WeaveResult;
use weave_core::graph::UserId;
use weave_core::models::{Suggestion, SuggestionPage, SuggestionQuery};
use weave_core::traits::{IEdgeStore, IProfileStore, IRequestStore};

use crate::enrich;
use crate::exclusion;
use crate::generators;
use crate::ranking::{self, scorer};

/// The suggestion engine. Borrows the three stores for the duration of the
/// call; holds no graph state of its own.
pub struct SuggestionEngine<'a> {
    pub(crate) profiles: &'a dyn IProfileStore,
    pub(crate) edges: &'a dyn IEdgeStore,
    pub(crate) requests: &'a dyn IRequestStore,
    config: SuggestConfig,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(
        profiles: &'a dyn IProfileStore,
        edges: &'a dyn IEdgeStore,
        requests: &'a dyn IRequestStore,
    ) -> Self {
        Self {
            profiles,
            edges,
            requests,
            config: SuggestConfig::default(),
        }
    }

    /// Override the default scoring configuration.
    pub fn with_config(mut self, config: SuggestConfig) -> Self {
        self.config = config;
        self
    }

    /// Produce one page of connection suggestions for the given user.
    ///
    /// Store failures during exclusion resolution or generation are fatal;
    /// an enrichment failure degrades the page (candidates proceed
    /// unenriched) and is only logged.
    pub fn get_suggestions(
        &self,
        user: &UserId,
        query: &SuggestionQuery,
    ) -> WeaveResult<SuggestionPage> {
        let exclusions = exclusion::resolve(self.edges, self.requests, user, &query.exclude_ids)?;
        debug!(user = %user, excluded = exclusions.len(), "resolved exclusion set");

        let fetch_limit = (query.offset + query.limit).max(1) * CANDIDATE_OVERFETCH_FACTOR;
        let (candidates, strategy_used) = generators::generate(
            self.profiles,
            self.edges,
            user,
            query,
            &exclusions,
            fetch_limit,
        )?;
        if candidates.is_empty() {
            debug!(user = %user, strategy = %strategy_used, "no candidates generated");
            return Ok(SuggestionPage {
                suggestions: Vec::new(),
                total_count: 0,
                has_more: false,
                strategy_used,
            });
        }
        info!(
            candidates = candidates.len(),
            strategy = %strategy_used,
            "generation complete"
        );

        let candidate_ids: Vec<UserId> =
            candidates.iter().map(|c| c.profile.id.clone()).collect();

        // Both enrichment passes run over the fixed candidate batch and are
        // individually degradable.
        let mutuals = if query.include_mutual {
            match enrich::mutuals::lookup(self.edges, self.profiles, user, &candidate_ids) {
                Ok(map) => Some(map),
                Err(e) => {
                    warn!(error = %e, "mutual enrichment failed, continuing unenriched");
                    None
                }
            }
        } else {
            None
        };
        let request_state = match enrich::requests::lookup(self.requests, user, &candidate_ids) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!(error = %e, "request-status enrichment failed, continuing unenriched");
                None
            }
        };

        let now = Utc::now();
        let mut suggestions: Vec<Suggestion> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let (mutual_count, mutual_sample) = match mutuals
                .as_ref()
                .and_then(|m| m.get(&candidate.profile.id))
            {
                Some(m) => (m.count, m.sample.clone()),
                None => (candidate.mutual_count, Vec::new()),
            };

            let state = request_state
                .as_ref()
                .and_then(|m| m.get(&candidate.profile.id));
            let outgoing_request = state.and_then(|s| s.outgoing.clone());
            let incoming_request = state.and_then(|s| s.incoming.clone());
            let can_send_request = state.map_or(true, |s| s.can_send());

            let relevance_score = scorer::relevance_score(
                &candidate.profile,
                candidate.base_score,
                mutual_count,
                strategy_used,
                now,
                &self.config.weights,
            );

            suggestions.push(Suggestion {
                profile: candidate.profile,
                mutual_count,
                mutual_sample,
                relevance_score,
                outgoing_request,
                incoming_request,
                can_send_request,
            });
        }

        ranking::sort_suggestions(&mut suggestions);
        let total_count = suggestions.len();
        let (page, has_more) = ranking::paginate(suggestions, query.offset, query.limit);
        info!(
            total = total_count,
            returned = page.len(),
            has_more,
            "suggestion call complete"
        );

        Ok(SuggestionPage {
            suggestions: page,
            total_count,
            has_more,
            strategy_used,
        })
    }
}
