//! Integration tests driving the engines through caller-owned session state

use dashboard::prelude::*;
use std::sync::Arc;

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-09-21T12:00:00Z").unwrap()
}

struct Fixture {
    engine: RecordQueryEngine,
    store: InMemoryOrderStore,
}

impl Fixture {
    fn new() -> Self {
        Self {
            engine: RecordQueryEngine::new(Arc::new(FixedClock::new(now()))),
            store: InMemoryOrderStore::new(seed_orders(now())).unwrap(),
        }
    }

    fn render(&self, session: &TableSession) -> Page {
        self.engine.query(&self.store, session.spec())
    }
}

#[test]
fn test_header_clicks_cycle_sort() {
    let fx = Fixture::new();
    let mut session = TableSession::default();

    session.toggle_sort(SortColumn::Date);
    assert_eq!(fx.render(&session).items[0].order_id, "#CM9815");

    session.toggle_sort(SortColumn::Date);
    assert_eq!(fx.render(&session).items[0].order_id, "#CM9801");

    session.toggle_sort(SortColumn::Date);
    assert!(session.spec().active_sort().is_none());
    assert_eq!(fx.render(&session).items[0].order_id, "#CM9801");
}

#[test]
fn test_filter_change_returns_to_first_page() {
    let fx = Fixture::new();
    let mut session = TableSession::default();

    session.set_page(1);
    assert_eq!(fx.render(&session).items.len(), 5);

    session.toggle_status(OrderStatus::Complete);
    assert_eq!(session.spec().page, 0);
    assert_eq!(fx.render(&session).total_matched, 5);

    session.set_page(1);
    session.set_search_text("wilson");
    assert_eq!(session.spec().page, 0);
    assert_eq!(fx.render(&session).total_matched, 0);

    session.clear_filters();
    assert_eq!(fx.render(&session).total_matched, 2);
}

#[test]
fn test_select_all_on_current_page() {
    let fx = Fixture::new();
    let mut session = TableSession::default();
    session.set_page_size(5);

    let page = fx.render(&session);
    session.toggle_select_all(page.ids());
    assert_eq!(session.selected_count(), 5);
    assert!(session.is_selected("3"));

    session.toggle_select_all(page.ids());
    assert_eq!(session.selected_count(), 0);
}

#[test]
fn test_date_range_from_session() {
    let fx = Fixture::new();
    let mut session = TableSession::default();

    session.set_date_range(DateRange::Yesterday);
    let page = fx.render(&session);
    assert_eq!(page.ids(), vec!["8", "9"]);
    assert!(session.has_active_filters());
}

#[test]
fn test_navigation_resets_context() {
    let mut ctx = DashboardContext::default();
    ctx.toggle_theme();
    ctx.toggle_menu("ecommerce");
    ctx.search_text = "orders".to_string();

    ctx.reset_on_navigation();

    assert_eq!(ctx.theme, Theme::Dark);
    assert!(!ctx.is_menu_expanded("ecommerce"));
    assert!(ctx.search_text.is_empty());
    assert!(ctx.sidebar_open && ctx.right_panel_open);
}

#[test]
fn test_panel_feed_read_state() {
    let mut feed = seed_panel_feed();
    assert_eq!(feed.unread_count(), 4);

    assert!(feed.mark_read(2));
    assert_eq!(feed.unread_count(), 3);

    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);

    let activity_times: Vec<_> = feed
        .items_of(PanelItemKind::Activity)
        .filter_map(PanelItem::time)
        .collect();
    assert_eq!(activity_times.first(), Some(&"Just now"));
    assert_eq!(activity_times.last(), Some(&"Feb 2, 2023"));
}
