//! Integration tests for the orders table query pipeline

use dashboard::prelude::*;
use std::sync::Arc;

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-09-21T12:00:00Z").unwrap()
}

fn engine() -> RecordQueryEngine {
    RecordQueryEngine::new(Arc::new(FixedClock::new(now())))
}

fn store() -> InMemoryOrderStore {
    InMemoryOrderStore::new(seed_orders(now())).unwrap()
}

fn order_ids(page: &Page) -> Vec<&str> {
    page.items.iter().map(|o| o.order_id.as_str()).collect()
}

fn order(id: &str, date: &str, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        id: id.to_string(),
        order_id: format!("#CM{}", id),
        user: OrderUser {
            name: format!("User {}", id),
            avatar: String::new(),
        },
        project: "Project".to_string(),
        address: "Address".to_string(),
        date: date.to_string(),
        status,
    }
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_single_match() {
    let spec = QuerySpec::default().with_search("natali");
    let page = engine().query(&store(), &spec);

    assert_eq!(page.total_matched, 1);
    assert_eq!(order_ids(&page), vec!["#CM9801"]);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    // "Andi Lane" (user and address) and "Meadow Lane Oakland" (address)
    let page = engine().query(&store(), &QuerySpec::default().with_search("LANE"));
    assert_eq!(order_ids(&page), vec!["#CM9801", "#CM9805"]);

    // Project field
    let page = engine().query(&store(), &QuerySpec::default().with_search("landing"));
    assert_eq!(order_ids(&page), vec!["#CM9801", "#CM9805"]);

    // Order id field
    let page = engine().query(&store(), &QuerySpec::default().with_search("#cm981"));
    assert_eq!(page.total_matched, 6);
}

#[test]
fn test_search_without_match_is_empty() {
    let page = engine().query(&store(), &QuerySpec::default().with_search("zzz"));
    assert_eq!(page.total_matched, 0);
    assert!(page.items.is_empty());
}

// ============================================================================
// Status filter and severity sort
// ============================================================================

#[test]
fn test_status_filter_sorted_by_severity() {
    let spec = QuerySpec::default()
        .with_statuses([OrderStatus::Rejected, OrderStatus::Pending])
        .with_sort(SortColumn::Status, SortDirection::Ascending);
    let page = engine().query(&store(), &spec);

    assert_eq!(page.total_matched, 4);
    assert_eq!(order_ids(&page), vec!["#CM9805", "#CM9812", "#CM9803", "#CM9808"]);
}

#[test]
fn test_status_sort_descending_keeps_ties_stable() {
    let spec = QuerySpec::default()
        .with_statuses([OrderStatus::Rejected, OrderStatus::Pending])
        .with_sort(SortColumn::Status, SortDirection::Descending);
    let page = engine().query(&store(), &spec);

    assert_eq!(order_ids(&page), vec!["#CM9803", "#CM9808", "#CM9805", "#CM9812"]);
}

#[test]
fn test_status_counts() {
    let counts: Vec<usize> = OrderStatus::ALL
        .into_iter()
        .map(|status| {
            engine()
                .query(&store(), &QuerySpec::default().with_statuses([status]))
                .total_matched
        })
        .collect();

    // In Progress, Complete, Pending, Approved, Rejected
    assert_eq!(counts, vec![3, 5, 2, 3, 2]);
}

// ============================================================================
// Date ranges
// ============================================================================

#[test]
fn test_today_includes_fresh_excludes_old() {
    let records = vec![
        order("1", "2024-09-21T11:59:45Z", OrderStatus::Pending),
        order("2", "2024-09-20T05:00:00Z", OrderStatus::Pending),
    ];
    let spec = QuerySpec::default().with_date_range(DateRange::Today);
    let page = engine().apply(&records, &spec);

    assert_eq!(page.ids(), vec!["1"]);
}

#[test]
fn test_date_range_counts_over_seed() {
    let counts: Vec<usize> = DateRange::ALL
        .into_iter()
        .map(|range| {
            engine()
                .query(&store(), &QuerySpec::default().with_date_range(range))
                .total_matched
        })
        .collect();

    // Today, Yesterday, Last 7 days, Last 30 days, All time
    assert_eq!(counts, vec![7, 2, 11, 11, 15]);
}

#[test]
fn test_malformed_dates_only_pass_all_time() {
    let records = vec![
        order("1", "2024-09-21T10:00:00Z", OrderStatus::Complete),
        order("2", "not a date", OrderStatus::Complete),
    ];

    let page = engine().apply(&records, &QuerySpec::default());
    assert_eq!(page.total_matched, 2);

    let spec = QuerySpec::default().with_date_range(DateRange::Last30Days);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["1"]);
}

#[test]
fn test_malformed_dates_sort_as_newest() {
    let records = vec![
        order("1", "2024-09-21T10:00:00Z", OrderStatus::Complete),
        order("2", "garbage", OrderStatus::Complete),
        order("3", "2024-01-01T00:00:00Z", OrderStatus::Complete),
    ];
    let spec = QuerySpec::default().with_sort(SortColumn::Date, SortDirection::Ascending);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["3", "1", "2"]);

    let spec = QuerySpec::default().with_sort(SortColumn::Date, SortDirection::Descending);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["2", "1", "3"]);

    assert_eq!(format_table_date("garbage", now()), "Just now");
}

#[test]
fn test_offsetless_iso_dates_pass_bounded_ranges() {
    let records = vec![
        order("1", "2024-09-21T10:00:00", OrderStatus::Pending),
        order("2", "2024-09-20", OrderStatus::Pending),
    ];

    let spec = QuerySpec::default().with_date_range(DateRange::Last7Days);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.total_matched, 2);

    let spec = QuerySpec::default().with_date_range(DateRange::Today);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["1"]);

    let spec = QuerySpec::default().with_date_range(DateRange::Yesterday);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["2"]);
}

#[test]
fn test_legacy_relative_phrases_are_resolved() {
    let records = vec![
        order("1", "Just now", OrderStatus::Pending),
        order("2", "yesterday", OrderStatus::Pending),
    ];
    let spec = QuerySpec::default().with_date_range(DateRange::Today);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["1"]);

    let spec = QuerySpec::default().with_date_range(DateRange::Yesterday);
    let page = engine().apply(&records, &spec);
    assert_eq!(page.ids(), vec!["2"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_by_date_descending_is_newest_first() {
    let spec = QuerySpec::default()
        .with_sort(SortColumn::Date, SortDirection::Descending)
        .with_page(0, 25);
    let page = engine().query(&store(), &spec);

    let expected: Vec<String> = (1..=15).map(|n| format!("#CM98{:02}", n)).collect();
    assert_eq!(order_ids(&page), expected);
}

#[test]
fn test_sort_by_user_ascending() {
    let spec = QuerySpec::default()
        .with_sort(SortColumn::User, SortDirection::Ascending)
        .with_page(0, 3);
    let page = engine().query(&store(), &spec);

    let names: Vec<&str> = page.items.iter().map(|o| o.user.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Rodriguez", "Andi Lane", "Anna Garcia"]);
}

#[test]
fn test_unsorted_keeps_source_order() {
    let spec = QuerySpec::default().with_sort(SortColumn::User, SortDirection::None);
    let page = engine().query(&store(), &spec);
    assert_eq!(page.items[0].order_id, "#CM9801");
    assert_eq!(page.items[9].order_id, "#CM9810");
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_second_page() {
    let spec = QuerySpec::default().with_page(1, 10);
    let page = engine().query(&store(), &spec);

    assert_eq!(page.total_matched, 15);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].order_id, "#CM9811");

    let meta = page.meta(&spec);
    assert_eq!(meta.total_pages, 2);
    assert!(meta.has_prev);
    assert!(!meta.has_next);
    assert_eq!((meta.first_row(), meta.last_row()), (11, 15));
}

#[test]
fn test_page_past_end_is_empty() {
    let spec = QuerySpec::default().with_page(5, 10);
    let page = engine().query(&store(), &spec);

    assert!(page.items.is_empty());
    assert_eq!(page.total_matched, 15);
}

#[test]
fn test_zero_page_size_acts_as_one() {
    let spec = QuerySpec::default().with_page(2, 0);
    let page = engine().query(&store(), &spec);

    assert_eq!(order_ids(&page), vec!["#CM9803"]);
}

#[test]
fn test_empty_source() {
    let empty: Vec<OrderRecord> = Vec::new();
    let page = engine().query(&empty, &QuerySpec::default());

    assert_eq!(page.total_matched, 0);
    assert_eq!(page.meta(&QuerySpec::default()).total_pages, 0);
}

// ============================================================================
// Date formatting
// ============================================================================

#[test]
fn test_format_seed_dates() {
    let formatted: Vec<String> = seed_orders(now())
        .iter()
        .map(|o| format_table_date(&o.date, now()))
        .collect();

    assert_eq!(formatted[0], "Just now");
    assert_eq!(formatted[1], "a minute ago");
    assert_eq!(formatted[2], "5 minutes ago");
    assert_eq!(formatted[4], "an hour ago");
    assert_eq!(formatted[7], "Yesterday");
    assert_eq!(formatted[14], "Jun 5, 2023");
}
