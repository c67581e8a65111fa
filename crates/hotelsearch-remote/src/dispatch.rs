//! Request dispatch and result normalization.

use hotelsearch_core::error::Result;
use hotelsearch_core::traits::{RawResponse, SearchPlan, SearchService};
use hotelsearch_core::types::{ResultItem, SearchRequest, SearchResultEnvelope};
use hotelsearch_query::resolve;

const SERVICE_ANNOTATION_PREFIX: &str = "@search.";
const SCORE_KEY: &str = "@search.score";
const RERANKER_KEY: &str = "@search.rerankerScore";
const CAPTIONS_KEY: &str = "@search.captions";

/// Sends one resolved request to the external collaborator and
/// normalizes whatever comes back. No retries at this layer.
pub struct Dispatcher<S: SearchService> {
    service: S,
}

impl<S: SearchService> Dispatcher<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn dispatch(&self, request: &SearchRequest) -> Result<SearchResultEnvelope> {
        let params = resolve(request.mode, request.filter.clone());
        let plan = SearchPlan {
            // Empty query means "match everything"; the wildcard is
            // substituted here so the trigger policy upstream still
            // sees the empty string.
            search_text: if request.query_text.is_empty() {
                "*".to_string()
            } else {
                request.query_text.clone()
            },
            query_kind: params.query_kind,
            filter: params.filter.as_ref().map(|f| f.render()),
            top: request.result_limit,
            captions: params.captions,
            answers: params.answers,
        };

        tracing::debug!(
            query = %plan.search_text,
            kind = ?plan.query_kind,
            filter = plan.filter.as_deref().unwrap_or("none"),
            top = plan.top,
            "dispatching search"
        );

        let raw = self.service.search(&plan).map_err(|e| {
            tracing::warn!(error = %e, "search dispatch failed");
            e
        })?;

        Ok(normalize(raw, request))
    }
}

/// Turn the service's heterogeneous response into the fixed envelope
/// shape. Missing optional attributes become `None`, item order is the
/// service's ranking order, untouched.
fn normalize(raw: RawResponse, request: &SearchRequest) -> SearchResultEnvelope {
    let items: Vec<ResultItem> = raw.documents.into_iter().map(normalize_document).collect();
    let total_count = raw.total_count.unwrap_or(items.len() as u64);
    SearchResultEnvelope {
        total_count,
        answers: raw.answers.as_ref().and_then(extract_texts),
        items,
        mode: request.mode,
    }
}

fn normalize_document(mut doc: serde_json::Map<String, serde_json::Value>) -> ResultItem {
    let relevance_score = doc.get(SCORE_KEY).and_then(serde_json::Value::as_f64);
    let reranker_score = doc.get(RERANKER_KEY).and_then(serde_json::Value::as_f64);
    let captions = doc.get(CAPTIONS_KEY).and_then(extract_texts);
    doc.retain(|key, _| !key.starts_with(SERVICE_ANNOTATION_PREFIX));
    ResultItem {
        fields: doc,
        relevance_score,
        reranker_score,
        captions,
    }
}

/// Captions and answers arrive as arrays of either plain strings or
/// `{"text": ...}` objects. An empty or absent array normalizes to
/// `None` so downstream code has a single absence representation.
fn extract_texts(value: &serde_json::Value) -> Option<Vec<String>> {
    let entries = value.as_array()?;
    let texts: Vec<String> = entries
        .iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(obj) => obj
                .get("text")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts)
    }
}
