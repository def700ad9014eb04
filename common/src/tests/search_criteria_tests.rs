use super::*;

#[test]
fn sort_state_cycles_through_three_states() {
    assert_eq!(SortState::Unsorted.cycled(), SortState::Ascending);
    assert_eq!(SortState::Ascending.cycled(), SortState::Descending);
    assert_eq!(SortState::Descending.cycled(), SortState::Unsorted);

    assert_eq!(SortState::Unsorted.direction(), None);
    assert_eq!(SortState::Ascending.direction(), Some(SortDirection::Asc));
    assert_eq!(SortState::Descending.direction(), Some(SortDirection::Desc));
}

#[test]
fn two_toggles_sort_descending_three_remove_the_column() {
    let once = SearchCriteria::default().toggle_sort(SortField::Name);
    assert_eq!(once.sort_state(SortField::Name), SortState::Ascending);

    let twice = once.toggle_sort(SortField::Name);
    assert_eq!(twice.sort_state(SortField::Name), SortState::Descending);

    let thrice = twice.toggle_sort(SortField::Name);
    assert_eq!(thrice.sort_state(SortField::Name), SortState::Unsorted);
    assert!(thrice.sorting.is_empty());
}

#[test]
fn flipping_a_sort_keeps_its_precedence() {
    let criteria = SearchCriteria::default()
        .toggle_sort(SortField::Industry)
        .toggle_sort(SortField::Name);

    let flipped = criteria.toggle_sort(SortField::Industry);
    assert_eq!(
        flipped.sorting,
        vec![
            SortCriterion {
                field: SortField::Industry,
                direction: SortDirection::Desc,
            },
            SortCriterion {
                field: SortField::Name,
                direction: SortDirection::Asc,
            },
        ]
    );
}

#[test]
fn new_sort_columns_append_after_existing_ones() {
    let criteria = SearchCriteria::default()
        .toggle_sort(SortField::SharePrice)
        .toggle_sort(SortField::Ticker);
    assert_eq!(criteria.sorting[0].field, SortField::SharePrice);
    assert_eq!(criteria.sorting[1].field, SortField::Ticker);
}

#[test]
fn removing_the_last_category_value_drops_the_key() {
    let criteria = SearchCriteria::default()
        .toggle_category(CategoryField::Industry, "Technology", true)
        .toggle_category(CategoryField::Industry, "Healthcare", true);
    assert_eq!(criteria.filters.categories[&CategoryField::Industry].len(), 2);

    let criteria = criteria
        .toggle_category(CategoryField::Industry, "Technology", false)
        .toggle_category(CategoryField::Industry, "Healthcare", false);
    assert!(!criteria.filters.categories.contains_key(&CategoryField::Industry));
    assert!(criteria.filters.is_empty());
}

#[test]
fn category_toggles_are_idempotent() {
    let once = SearchCriteria::default().toggle_category(CategoryField::SubIndustry, "Biotech", true);
    let twice = once.toggle_category(CategoryField::SubIndustry, "Biotech", true);
    assert_eq!(once, twice);

    let removed_absent = SearchCriteria::default().toggle_category(CategoryField::Industry, "Energy", false);
    assert_eq!(removed_absent, SearchCriteria::default());
}

#[test]
fn unbounded_range_application_equals_clearing() {
    let with_range = SearchCriteria::default().apply_range(
        NumericField::SharePrice,
        NumericRange::new(Some(10.0), Some(50.0)),
    );
    assert!(with_range.filters.numeric_ranges.contains_key(&NumericField::SharePrice));

    let cleared = with_range.apply_range(NumericField::SharePrice, NumericRange::new(None, None));
    assert_eq!(cleared, with_range.clear_range(NumericField::SharePrice));
    assert_eq!(cleared, SearchCriteria::default());
}

#[test]
fn applying_a_range_replaces_it_wholesale() {
    let first = SearchCriteria::default().apply_range(
        NumericField::EquityValue,
        NumericRange::new(Some(1.0), None),
    );
    let second = first.apply_range(NumericField::EquityValue, NumericRange::new(None, Some(9.0)));
    assert_eq!(
        second.filters.numeric_ranges[&NumericField::EquityValue],
        NumericRange::new(None, Some(9.0))
    );
}

#[test]
fn blank_search_terms_clear_the_term() {
    let typed = SearchCriteria::default().with_search_term("acme");
    assert_eq!(typed.search.as_deref(), Some("acme"));

    let cleared = typed.with_search_term("   ");
    assert_eq!(cleared.search, None);
    assert_eq!(cleared, SearchCriteria::default());
}

#[test]
fn edits_leave_the_source_criteria_untouched() {
    let base = SearchCriteria::default().with_search_term("green");
    let snapshot = base.clone();

    let _ = base.toggle_sort(SortField::Name);
    let _ = base.toggle_category(CategoryField::Industry, "Energy", true);
    let _ = base.apply_range(NumericField::LtmRevenue, NumericRange::new(Some(5.0), None));

    assert_eq!(base, snapshot);
}

#[test]
fn criteria_serialize_to_the_directory_wire_shape() {
    let criteria = SearchCriteria::default()
        .with_search_term("tech")
        .toggle_sort(SortField::Name)
        .toggle_category(CategoryField::Industry, "Technology", true)
        .toggle_category(CategoryField::SubIndustry, "Semiconductors", true)
        .apply_range(NumericField::SharePrice, NumericRange::new(Some(10.0), Some(50.0)));

    let value = serde_json::to_value(&criteria).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "search": "tech",
            "sorting": [{"field": "name", "direction": "asc"}],
            "filters": {
                "industries": ["Technology"],
                "subIndustries": ["Semiconductors"],
                "numericRanges": {"stats.share_price": {"min": 10.0, "max": 50.0}}
            },
            "pagination": {"offset": 0, "limit": 50}
        })
    );
}

#[test]
fn empty_parts_are_omitted_from_the_wire() {
    let value = serde_json::to_value(SearchCriteria::default()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"pagination": {"offset": 0, "limit": 50}})
    );
}

#[test]
fn minimal_request_bodies_deserialize_to_defaults() {
    let criteria: SearchCriteria = serde_json::from_str("{}").unwrap();
    assert_eq!(criteria, SearchCriteria::default());

    let criteria: SearchCriteria =
        serde_json::from_str(r#"{"filters": {"industries": ["Energy"]}}"#).unwrap();
    assert!(criteria.filters.categories[&CategoryField::Industry].contains("Energy"));
    assert_eq!(criteria.pagination, Pagination::default());
}

#[test]
fn unknown_filter_and_sort_fields_are_rejected() {
    let result = serde_json::from_str::<SearchCriteria>(r#"{"filters": {"regions": ["EU"]}}"#);
    assert!(result.is_err());

    let result = serde_json::from_str::<SearchCriteria>(
        r#"{"sorting": [{"field": "profit", "direction": "asc"}]}"#,
    );
    assert!(result.is_err());
}

#[test]
fn serialized_criteria_deserialize_back_equal() {
    let criteria = SearchCriteria::default()
        .with_search_term("solar")
        .toggle_sort(SortField::EquityValue)
        .toggle_sort(SortField::EquityValue)
        .toggle_category(CategoryField::Industry, "Energy", true)
        .apply_range(NumericField::EvToEbitda, NumericRange::new(None, Some(12.0)));

    let encoded = serde_json::to_string(&criteria).unwrap();
    let decoded: SearchCriteria = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, criteria);
}

#[test]
fn range_inputs_parse_leniently() {
    assert_eq!(
        NumericRange::from_inputs("10", "50.5"),
        NumericRange::new(Some(10.0), Some(50.5))
    );
    assert_eq!(
        NumericRange::from_inputs(" 10 ", ""),
        NumericRange::new(Some(10.0), None)
    );
    assert_eq!(
        NumericRange::from_inputs("abc", "1e3"),
        NumericRange::new(None, Some(1000.0))
    );
    assert!(NumericRange::from_inputs("NaN", "inf").is_unbounded());
}

#[test]
fn range_containment_is_inclusive() {
    let range = NumericRange::new(Some(10.0), Some(50.0));
    assert!(range.contains(10.0));
    assert!(range.contains(50.0));
    assert!(!range.contains(9.999));
    assert!(!range.contains(50.001));

    assert!(NumericRange::new(None, Some(5.0)).contains(-1000.0));
    assert!(NumericRange::new(Some(5.0), None).contains(1e12));
}
