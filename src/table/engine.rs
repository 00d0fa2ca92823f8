//! The orders-table query pipeline: search, filter, sort, paginate

use crate::core::clock::{Clock, SystemClock, start_of_day};
use crate::core::order::OrderRecord;
use crate::core::query::{Page, QuerySpec};
use crate::core::store::RecordSource;
use crate::table::filters::{DateWindow, matches_search, matches_status, search_needle};
use crate::table::sort::{Keyed, sort_rows};
use std::sync::Arc;

/// Stateless query engine over an in-memory record set
///
/// The only collaborator is the [`Clock`] used to anchor date ranges, so
/// the engine is cheap to clone and safe to share across threads.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use chrono::DateTime;
/// use dashboard::core::{FixedClock, QuerySpec};
/// use dashboard::storage::seed::seed_orders;
/// use dashboard::table::RecordQueryEngine;
///
/// let now = DateTime::parse_from_rfc3339("2024-09-21T12:00:00Z").unwrap();
/// let engine = RecordQueryEngine::new(Arc::new(FixedClock::new(now)));
/// let orders = seed_orders(now);
///
/// let page = engine.apply(&orders, &QuerySpec::default().with_search("natali"));
/// assert_eq!(page.total_matched, 1);
/// assert_eq!(page.items[0].order_id, "#CM9801");
/// ```
#[derive(Clone)]
pub struct RecordQueryEngine {
    clock: Arc<dyn Clock>,
}

impl RecordQueryEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Engine anchored to the operating system's local time
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Run `spec` against `records` and return the requested page
    pub fn apply(&self, records: &[OrderRecord], spec: &QuerySpec) -> Page {
        let rows = self.matching(records, spec);
        let total_matched = rows.len();

        let start = spec.page.saturating_mul(spec.page_size());
        let items: Vec<OrderRecord> = rows
            .into_iter()
            .skip(start)
            .take(spec.page_size())
            .cloned()
            .collect();

        tracing::debug!(
            search = %spec.search_text,
            statuses = spec.status_filter.len(),
            date_range = %spec.date_range,
            total_matched,
            page = spec.page,
            returned = items.len(),
            "Orders query applied"
        );

        Page {
            items,
            total_matched,
        }
    }

    /// Run `spec` against any record source
    pub fn query<S: RecordSource + ?Sized>(&self, source: &S, spec: &QuerySpec) -> Page {
        self.apply(source.records(), spec)
    }

    /// Every row that passes search and filters, in sorted order, before pagination
    pub fn matching<'a>(
        &self,
        records: &'a [OrderRecord],
        spec: &QuerySpec,
    ) -> Vec<&'a OrderRecord> {
        // One clock reading anchors both the date window and relative phrases.
        let now = self.clock.now();
        let window = DateWindow::for_range(spec.date_range, start_of_day(now));
        let needle = search_needle(&spec.search_text);
        let sort = spec.active_sort();
        let needs_dates = !window.is_unbounded() || sort.is_some();

        let mut unresolved = 0usize;
        let mut rows: Vec<Keyed<'a>> = records
            .iter()
            .filter(|record| needle.as_deref().is_none_or(|n| matches_search(record, n)))
            .filter(|record| matches_status(record, &spec.status_filter))
            .filter_map(|record| {
                let date = if needs_dates {
                    record.resolve_date(now)
                } else {
                    None
                };
                if !window.contains(date) {
                    if date.is_none() {
                        unresolved += 1;
                    }
                    return None;
                }
                Some(Keyed {
                    record,
                    date: date.unwrap_or(now),
                })
            })
            .collect();

        if unresolved > 0 {
            tracing::warn!(
                count = unresolved,
                date_range = %spec.date_range,
                "Records with unparseable dates excluded from date range"
            );
        }

        if let Some((column, direction)) = sort {
            sort_rows(&mut rows, column, direction);
        }

        rows.into_iter().map(|row| row.record).collect()
    }
}

impl Default for RecordQueryEngine {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl std::fmt::Debug for RecordQueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordQueryEngine").finish_non_exhaustive()
    }
}
