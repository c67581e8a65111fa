//! Envelope to display records. Rendering itself is the caller's
//! problem; this only fixes the mapping contract.

use hotelsearch_core::types::{ResultItem, SearchResultEnvelope};

/// What a result row needs for display, with the raw fields passed
/// through for free-form rendering.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub title: String,
    pub score: Option<f64>,
    pub caption: Option<String>,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Map an envelope to display records, preserving the service's order.
///
/// The primary score is the reranker score when the mode ran semantic
/// ranking and one is present, else the relevance score. The caption
/// is the first one, if any.
pub fn present(envelope: &SearchResultEnvelope) -> Vec<DisplayRecord> {
    let semantic = envelope.mode.is_semantic();
    envelope
        .items
        .iter()
        .map(|item| DisplayRecord {
            title: title_of(item),
            score: primary_score(item, semantic),
            caption: item
                .captions
                .as_ref()
                .and_then(|captions| captions.first().cloned()),
            fields: item.fields.clone(),
        })
        .collect()
}

fn primary_score(item: &ResultItem, semantic: bool) -> Option<f64> {
    if semantic {
        item.reranker_score.or(item.relevance_score)
    } else {
        item.relevance_score
    }
}

fn title_of(item: &ResultItem) -> String {
    for key in ["HotelName", "HotelId"] {
        if let Some(serde_json::Value::String(s)) = item.fields.get(key) {
            return s.clone();
        }
    }
    "Unknown Hotel".to_string()
}
