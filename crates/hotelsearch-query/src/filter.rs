//! Facet selection to filter expression.

use hotelsearch_core::types::{FacetSelection, FilterClause, FilterExpression, MIN_RATING_FLOOR};

/// Build the filter conjunction for a facet selection.
///
/// Clause order is fixed: rating, parking, categories. A selection
/// with every facet at its no-op value yields `None`, as does
/// `filters_enabled = false` regardless of the selection (pure
/// semantic mode disables the whole filter surface).
pub fn build_filter(selection: &FacetSelection, filters_enabled: bool) -> Option<FilterExpression> {
    if !filters_enabled {
        return None;
    }

    let mut clauses = Vec::new();

    if selection.min_rating > MIN_RATING_FLOOR {
        clauses.push(FilterClause::MinRating(selection.min_rating));
    }
    if selection.parking_required {
        clauses.push(FilterClause::ParkingIncluded);
    }
    if !selection.categories.is_empty() {
        clauses.push(FilterClause::CategoryAnyOf(selection.categories.clone()));
    }

    FilterExpression::new(clauses)
}
