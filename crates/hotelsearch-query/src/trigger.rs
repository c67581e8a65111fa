//! Dispatch decision and explicit session state.

use hotelsearch_core::types::SearchRequest;

/// Decide whether a new search must run.
///
/// An explicit trigger always fires. Otherwise auto-search fires only
/// when it is enabled, the request differs from the last executed one
/// (field-by-field, filter and mode included), and the request is not
/// a fully-empty unfiltered wildcard (which would dispatch pointlessly
/// on initial load).
///
/// Stateless on purpose: `previous` is passed in each call, and a true
/// result obliges the caller to record `current` as the new previous.
/// A missing `previous` (first evaluation) counts as unequal.
pub fn should_dispatch(
    current: &SearchRequest,
    previous: Option<&SearchRequest>,
    explicit_trigger: bool,
    auto_search_enabled: bool,
) -> bool {
    if explicit_trigger {
        return true;
    }
    if !auto_search_enabled {
        return false;
    }
    let changed = previous.map_or(true, |prev| prev != current);
    let has_input = !current.query_text.is_empty() || current.filter.is_some();
    changed && has_input
}

/// Holder for the one mutable value in the system: the last executed
/// request. Owned by the caller's evaluation loop; replaces the
/// ambient UI-session state the policy must not depend on.
#[derive(Debug, Default)]
pub struct SearchSession {
    last_executed: Option<SearchRequest>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_executed(&self) -> Option<&SearchRequest> {
        self.last_executed.as_ref()
    }

    /// Run the trigger policy against this session's previous request.
    pub fn evaluate(
        &self,
        current: &SearchRequest,
        explicit_trigger: bool,
        auto_search_enabled: bool,
    ) -> bool {
        should_dispatch(
            current,
            self.last_executed.as_ref(),
            explicit_trigger,
            auto_search_enabled,
        )
    }

    /// Record a dispatched request. Call after a true `evaluate`, once
    /// the dispatch has actually been issued.
    pub fn record(&mut self, request: SearchRequest) {
        self.last_executed = Some(request);
    }
}
