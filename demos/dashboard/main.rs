//! Dashboard Example
//!
//! Runs the headless dashboard engines against the seeded data:
//! - the orders table with a status filter, sorted by severity and paginated
//! - the "Total Sales" donut chart as SVG path data
//! - the right panel feed
//!
//! Pass a YAML config path as the first argument to override the defaults.

use dashboard::logging;
use dashboard::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(path)?,
        None => DashboardConfig::default_config(),
    };

    let clock = Arc::new(SystemClock);
    let now = clock.now();
    let store = InMemoryOrderStore::new(seed_orders(now))?;
    let engine = RecordQueryEngine::new(clock);

    // Orders table
    let mut session = TableSession::new(config.table.initial_query());
    session.toggle_status(OrderStatus::Rejected);
    session.toggle_status(OrderStatus::Pending);
    session.toggle_sort(SortColumn::Status);

    let page = engine.query(&store, session.spec());
    let meta = page.meta(session.spec());

    println!("📋 Orders ({} matched)", page.total_matched);
    for order in &page.items {
        println!(
            "  {:<8} {:<16} {:<22} {:<12} {}",
            order.order_id,
            order.user.name,
            order.project,
            order.status,
            format_table_date(&order.date, now)
        );
    }
    println!(
        "  {}-{} of {} (page {}/{})",
        meta.first_row(),
        meta.last_row(),
        meta.total,
        meta.page + 1,
        meta.total_pages.max(1)
    );

    // Donut chart
    let chart = config.donut.chart_spec(sales_segments());
    let arcs = DonutLayoutEngine::layout(&chart)?;

    println!("\n🍩 Total Sales ({:?} caps)", chart.cap_style);
    for arc in &arcs {
        println!(
            "  {:<10} {:>5.1}%  {}",
            arc.segment.name,
            arc.segment.share_of(chart.total()),
            arc.path_data
        );
    }

    // Right panel
    let mut feed = seed_panel_feed();
    println!("\n🔔 Notifications ({} unread)", feed.unread_count());
    for item in feed.items_of(PanelItemKind::Notification) {
        println!("  {:<40} {}", item.primary_text(), item.time().unwrap_or_default());
    }
    feed.mark_all_read();
    println!("  ✅ All read ({} unread)", feed.unread_count());

    let online: Vec<_> = feed.online_contacts().map(|c| c.primary_text()).collect();
    println!("\n👥 Online: {}", online.join(", "));

    Ok(())
}
