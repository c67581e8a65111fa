use hotelsearch_core::traits::QueryKind;
use hotelsearch_core::types::{
    Category, FacetSelection, FilterClause, FilterExpression, ResultItem, SearchMode,
    SearchRequest, SearchResultEnvelope,
};
use hotelsearch_query::{build_filter, present, resolve, should_dispatch, SearchSession};

fn rich_selection() -> FacetSelection {
    FacetSelection {
        min_rating: 4.0,
        parking_required: true,
        categories: vec![Category::Luxury, Category::Resort],
    }
}

fn rating_filter() -> FilterExpression {
    FilterExpression::new(vec![FilterClause::MinRating(4.0)]).expect("one clause")
}

// --- filter building ---

#[test]
fn disabled_filters_yield_none_regardless_of_selection() {
    assert!(build_filter(&rich_selection(), false).is_none());
}

#[test]
fn default_selection_yields_none() {
    assert!(
        build_filter(&FacetSelection::default(), true).is_none(),
        "no-op facets must not produce an empty conjunction"
    );
}

#[test]
fn clause_order_is_rating_then_parking_then_categories() {
    let expr = build_filter(&rich_selection(), true).expect("three active facets");
    assert_eq!(
        expr.render(),
        "Rating ge 4 and ParkingIncluded eq true and \
         (Category eq 'Luxury' or Category eq 'Resort')"
    );
}

#[test]
fn rating_at_floor_emits_no_rating_clause() {
    let selection = FacetSelection {
        min_rating: 1.0,
        parking_required: true,
        categories: Vec::new(),
    };
    let expr = build_filter(&selection, true).expect("parking is active");
    assert_eq!(expr.render(), "ParkingIncluded eq true");
}

#[test]
fn building_is_deterministic_for_equal_selections() {
    let a = build_filter(&rich_selection(), true);
    let b = build_filter(&rich_selection(), true);
    assert_eq!(a, b, "equal selections must produce equal expressions");
}

// --- mode resolution ---

#[test]
fn keyword_mode_is_lexical_with_filter_passthrough() {
    let params = resolve(SearchMode::Keyword, Some(rating_filter()));
    assert_eq!(params.query_kind, QueryKind::Simple);
    assert!(!params.captions);
    assert!(!params.answers);
    assert_eq!(params.filter, Some(rating_filter()));
}

#[test]
fn semantic_mode_always_drops_the_filter() {
    let params = resolve(SearchMode::Semantic, Some(rating_filter()));
    assert_eq!(params.query_kind, QueryKind::Semantic);
    assert!(params.captions);
    assert!(params.answers);
    assert!(params.filter.is_none(), "pure semantic must never carry a filter");
}

#[test]
fn semantic_with_filter_mode_keeps_the_filter() {
    let params = resolve(SearchMode::SemanticWithFilter, Some(rating_filter()));
    assert_eq!(params.query_kind, QueryKind::Semantic);
    assert!(params.captions);
    assert!(params.answers);
    assert_eq!(params.filter, Some(rating_filter()));
}

// --- trigger policy ---

fn request(query: &str, filter: Option<FilterExpression>) -> SearchRequest {
    SearchRequest::new(query, SearchMode::Keyword, filter, 10)
}

#[test]
fn explicit_trigger_always_fires() {
    let current = request("", None);
    assert!(should_dispatch(&current, None, true, true));
    assert!(should_dispatch(&current, None, true, false));
}

#[test]
fn empty_unfiltered_request_never_auto_fires() {
    let current = request("", None);
    assert!(
        !should_dispatch(&current, None, false, true),
        "initial load with no query and no filter must not dispatch"
    );
}

#[test]
fn changed_query_auto_fires() {
    let previous = request("beach", None);
    let current = request("spa", None);
    assert!(should_dispatch(&current, Some(&previous), false, true));
}

#[test]
fn filter_only_change_auto_fires() {
    let previous = request("", None);
    let current = request("", Some(rating_filter()));
    assert!(should_dispatch(&current, Some(&previous), false, true));
}

#[test]
fn equal_requests_never_auto_fire() {
    let previous = request("spa", Some(rating_filter()));
    let current = previous.clone();
    for _ in 0..3 {
        assert!(
            !should_dispatch(&current, Some(&previous), false, true),
            "re-evaluating an unchanged request must stay quiet"
        );
    }
}

#[test]
fn auto_search_off_suppresses_changes() {
    let current = request("spa", None);
    assert!(!should_dispatch(&current, None, false, false));
}

#[test]
fn policy_is_pure() {
    let previous = request("beach", None);
    let current = request("spa", None);
    let first = should_dispatch(&current, Some(&previous), false, true);
    let second = should_dispatch(&current, Some(&previous), false, true);
    assert_eq!(first, second, "identical arguments must yield identical results");
}

#[test]
fn session_records_previous_between_cycles() {
    let mut session = SearchSession::new();
    let first = request("spa", None);

    assert!(session.evaluate(&first, false, true), "first evaluation fires");
    session.record(first.clone());
    assert_eq!(session.last_executed(), Some(&first));

    assert!(!session.evaluate(&first, false, true), "same request again stays quiet");

    let second = request("spa resort", None);
    assert!(session.evaluate(&second, false, true), "changed request fires");
}

// --- presentation ---

fn item(name: &str, relevance: Option<f64>, reranker: Option<f64>, captions: Option<Vec<&str>>) -> ResultItem {
    let mut fields = serde_json::Map::new();
    fields.insert("HotelName".to_string(), serde_json::Value::String(name.to_string()));
    ResultItem {
        fields,
        relevance_score: relevance,
        reranker_score: reranker,
        captions: captions.map(|c| c.into_iter().map(str::to_string).collect()),
    }
}

#[test]
fn presenter_preserves_order_and_titles() {
    let envelope = SearchResultEnvelope {
        items: vec![
            item("Sublime Cliff Hotel", Some(1.2), None, None),
            item("Arcadia Resort", Some(0.8), None, None),
        ],
        total_count: 2,
        answers: None,
        mode: SearchMode::Keyword,
    };

    let records = present(&envelope);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Sublime Cliff Hotel", "Arcadia Resort"]);
}

#[test]
fn semantic_mode_prefers_reranker_score() {
    let envelope = SearchResultEnvelope {
        items: vec![item("Arcadia Resort", Some(0.8), Some(2.7), None)],
        total_count: 1,
        answers: None,
        mode: SearchMode::Semantic,
    };

    let records = present(&envelope);
    assert_eq!(records[0].score, Some(2.7));
}

#[test]
fn semantic_mode_falls_back_to_relevance_without_reranker() {
    let envelope = SearchResultEnvelope {
        items: vec![item("Arcadia Resort", Some(0.8), None, None)],
        total_count: 1,
        answers: None,
        mode: SearchMode::SemanticWithFilter,
    };

    let records = present(&envelope);
    assert_eq!(records[0].score, Some(0.8));
}

#[test]
fn keyword_mode_ignores_reranker_score() {
    let envelope = SearchResultEnvelope {
        items: vec![item("Arcadia Resort", Some(0.8), Some(2.7), None)],
        total_count: 1,
        answers: None,
        mode: SearchMode::Keyword,
    };

    let records = present(&envelope);
    assert_eq!(records[0].score, Some(0.8));
}

#[test]
fn first_caption_wins() {
    let envelope = SearchResultEnvelope {
        items: vec![
            item("Arcadia Resort", None, None, Some(vec!["first snippet", "second snippet"])),
            item("Sublime Cliff Hotel", None, None, None),
        ],
        total_count: 2,
        answers: None,
        mode: SearchMode::Semantic,
    };

    let records = present(&envelope);
    assert_eq!(records[0].caption.as_deref(), Some("first snippet"));
    assert!(records[1].caption.is_none());
}

#[test]
fn missing_hotel_name_falls_back_to_id_then_placeholder() {
    let mut fields = serde_json::Map::new();
    fields.insert("HotelId".to_string(), serde_json::Value::String("41".to_string()));
    let with_id = ResultItem {
        fields,
        relevance_score: None,
        reranker_score: None,
        captions: None,
    };
    let bare = ResultItem {
        fields: serde_json::Map::new(),
        relevance_score: None,
        reranker_score: None,
        captions: None,
    };

    let envelope = SearchResultEnvelope {
        items: vec![with_id, bare],
        total_count: 2,
        answers: None,
        mode: SearchMode::Keyword,
    };

    let records = present(&envelope);
    assert_eq!(records[0].title, "41");
    assert_eq!(records[1].title, "Unknown Hotel");
}
