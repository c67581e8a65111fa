use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which query pipeline the service should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryKind {
    Simple,
    Semantic,
}

/// A fully-resolved request as handed to the external collaborator:
/// mode branching already applied, filter already rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub search_text: String,
    pub query_kind: QueryKind,
    pub filter: Option<String>,
    pub top: usize,
    pub captions: bool,
    pub answers: bool,
}

/// The heterogeneous shape the service returns, before normalization.
///
/// `documents` carry the raw field maps including any `@search.*`
/// annotations; the dispatcher strips and resolves those exactly once.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub documents: Vec<serde_json::Map<String, serde_json::Value>>,
    pub total_count: Option<u64>,
    pub answers: Option<serde_json::Value>,
}

/// The external search collaborator.
///
/// Implementations classify their own failures into the `SearchError`
/// taxonomy; they do not retry.
pub trait SearchService: Send + Sync {
    fn search(&self, plan: &SearchPlan) -> Result<RawResponse>;
}
