//! Search mode to concrete request parameters.

use hotelsearch_core::traits::QueryKind;
use hotelsearch_core::types::{FilterExpression, SearchMode};

/// The parameter set a mode resolves to. This is the unit the
/// dispatcher turns into a service call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSearchParams {
    pub query_kind: QueryKind,
    pub captions: bool,
    pub answers: bool,
    pub filter: Option<FilterExpression>,
}

/// Map a mode and an optional filter to concrete parameters.
///
/// This match is the only place the "pure semantic never carries a
/// filter" rule lives: the hosted service rejects or silently ignores
/// a filter in that mode inconsistently, so it is dropped here rather
/// than trusting the service to drop it.
pub fn resolve(mode: SearchMode, filter: Option<FilterExpression>) -> ResolvedSearchParams {
    match mode {
        SearchMode::Keyword => ResolvedSearchParams {
            query_kind: QueryKind::Simple,
            captions: false,
            answers: false,
            filter,
        },
        SearchMode::Semantic => ResolvedSearchParams {
            query_kind: QueryKind::Semantic,
            captions: true,
            answers: true,
            filter: None,
        },
        SearchMode::SemanticWithFilter => ResolvedSearchParams {
            query_kind: QueryKind::Semantic,
            captions: true,
            answers: true,
            filter,
        },
    }
}
