//! Domain types shared by the query-planning and dispatch layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ranking pipeline a search runs through.
///
/// Filters may only be attached in `Keyword` and `SemanticWithFilter`
/// mode; pure `Semantic` always ignores them (the hosted service is
/// inconsistent about rejecting vs. silently dropping a filter there,
/// so the planner never sends one).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchMode {
    Keyword,
    Semantic,
    SemanticWithFilter,
}

impl SearchMode {
    /// True for the modes that run the semantic reranker and can
    /// therefore carry reranker scores, captions and answers.
    pub fn is_semantic(self) -> bool {
        matches!(self, SearchMode::Semantic | SearchMode::SemanticWithFilter)
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyword" => Ok(SearchMode::Keyword),
            "semantic" => Ok(SearchMode::Semantic),
            "semantic-filter" | "semantic_filter" => Ok(SearchMode::SemanticWithFilter),
            other => Err(format!(
                "unknown mode '{}' (expected keyword, semantic or semantic-filter)",
                other
            )),
        }
    }
}

/// The closed set of category labels in the hotels index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Budget,
    Boutique,
    Luxury,
    Resort,
    Suite,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Budget,
        Category::Boutique,
        Category::Luxury,
        Category::Resort,
        Category::Suite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Budget => "Budget",
            Category::Boutique => "Boutique",
            Category::Luxury => "Luxury",
            Category::Resort => "Resort",
            Category::Suite => "Suite",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Rating slider floor; a selection at the floor emits no rating clause.
pub const MIN_RATING_FLOOR: f64 = 1.0;

/// Snapshot of the user's facet inputs for one evaluation cycle.
///
/// - `min_rating`: 1.0–5.0, pre-clamped by the input surface
/// - `parking_required`: only hotels with parking included
/// - `categories`: kept in the order the caller supplied them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub min_rating: f64,
    pub parking_required: bool,
    pub categories: Vec<Category>,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            min_rating: MIN_RATING_FLOOR,
            parking_required: false,
            categories: Vec::new(),
        }
    }
}

/// One predicate of a filter conjunction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterClause {
    /// `Rating ge <n>`
    MinRating(f64),
    /// `ParkingIncluded eq true`
    ParkingIncluded,
    /// `(Category eq 'A' or Category eq 'B')`, in supplied order.
    CategoryAnyOf(Vec<Category>),
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterClause::MinRating(min) => write!(f, "Rating ge {}", min),
            FilterClause::ParkingIncluded => write!(f, "ParkingIncluded eq true"),
            FilterClause::CategoryAnyOf(categories) => {
                write!(f, "(")?;
                for (i, c) in categories.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "Category eq '{}'", c.as_str())?;
                }
                write!(f, ")")
            }
        }
    }
}

/// An ordered conjunction of filter clauses.
///
/// Always non-empty: a selection that yields zero clauses is
/// represented as `None` at the call sites, never as an empty
/// expression. Rendering is deterministic, clauses joined with ` and `.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    clauses: Vec<FilterClause>,
}

impl FilterExpression {
    /// Returns `None` when `clauses` is empty.
    pub fn new(clauses: Vec<FilterClause>) -> Option<Self> {
        if clauses.is_empty() {
            None
        } else {
            Some(Self { clauses })
        }
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// The service-side predicate string, e.g.
    /// `Rating ge 4 and ParkingIncluded eq true and (Category eq 'Luxury')`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Bounds on the per-request result cap.
pub const RESULT_LIMIT_MIN: usize = 5;
pub const RESULT_LIMIT_MAX: usize = 50;

/// One fully-specified search, built fresh on every evaluation cycle.
///
/// Structural equality over all four fields is what the trigger policy
/// uses for change detection, so the limit is clamped here rather than
/// at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query_text: String,
    pub mode: SearchMode,
    pub filter: Option<FilterExpression>,
    pub result_limit: usize,
}

impl SearchRequest {
    pub fn new(
        query_text: impl Into<String>,
        mode: SearchMode,
        filter: Option<FilterExpression>,
        result_limit: usize,
    ) -> Self {
        Self {
            query_text: query_text.into(),
            mode,
            filter,
            result_limit: result_limit.clamp(RESULT_LIMIT_MIN, RESULT_LIMIT_MAX),
        }
    }
}

/// One normalized result record.
///
/// `fields` carries the document verbatim (service annotations
/// stripped). The optional attributes are resolved once at
/// normalization time; consumers never probe for presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub fields: serde_json::Map<String, serde_json::Value>,
    pub relevance_score: Option<f64>,
    pub reranker_score: Option<f64>,
    pub captions: Option<Vec<String>>,
}

/// The normalized outcome of one dispatch.
///
/// `items` keeps the service's ranking order; nothing downstream may
/// re-sort it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultEnvelope {
    pub items: Vec<ResultItem>,
    pub total_count: u64,
    pub answers: Option<Vec<String>>,
    pub mode: SearchMode,
}
