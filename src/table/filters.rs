//! Row predicates applied by the query pipeline
//!
//! Each predicate is a small pure function so the pipeline stages can be
//! tested on their own.

use crate::core::order::{OrderRecord, OrderStatus};
use crate::core::query::DateRange;
use chrono::{DateTime, Duration, FixedOffset};
use indexmap::IndexSet;

/// Lowercased search needle; `None` when the search box is empty
pub fn search_needle(search_text: &str) -> Option<String> {
    if search_text.is_empty() {
        None
    } else {
        Some(search_text.to_lowercase())
    }
}

/// Whether any searchable field contains `needle` (already lowercased)
pub fn matches_search(record: &OrderRecord, needle: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Whether the record's status is selected; an empty selection keeps everything
pub fn matches_status(record: &OrderRecord, selected: &IndexSet<OrderStatus>) -> bool {
    selected.is_empty() || selected.contains(&record.status)
}

/// Half-open time window `[start, end)` derived from a [`DateRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl DateWindow {
    /// Window for `range`, anchored at midnight of the current local day
    pub fn for_range(range: DateRange, start_of_today: DateTime<FixedOffset>) -> Self {
        let days_back = |days: i64| Some(start_of_today - Duration::days(days));
        match range {
            DateRange::Today => Self {
                start: Some(start_of_today),
                end: None,
            },
            DateRange::Yesterday => Self {
                start: days_back(1),
                end: Some(start_of_today),
            },
            DateRange::Last7Days => Self {
                start: days_back(7),
                end: None,
            },
            DateRange::Last30Days => Self {
                start: days_back(30),
                end: None,
            },
            DateRange::AllTime => Self::unbounded(),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a resolved record date falls in the window
    ///
    /// An unresolvable date (`None`) only passes an unbounded window.
    pub fn contains(&self, date: Option<DateTime<FixedOffset>>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::OrderUser;

    fn record(order_id: &str, name: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: order_id.to_string(),
            order_id: order_id.to_string(),
            user: OrderUser {
                name: name.to_string(),
                avatar: String::new(),
            },
            project: "Landing Page".to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date: "2024-09-21T10:00:00Z".to_string(),
            status,
        }
    }

    fn midnight() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-09-21T00:00:00Z").unwrap()
    }

    // === search ===

    #[test]
    fn test_empty_search_has_no_needle() {
        assert!(search_needle("").is_none());
        assert_eq!(search_needle("NaTaLi").as_deref(), Some("natali"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let r = record("#CM9801", "Natali Craig", OrderStatus::Pending);
        assert!(matches_search(&r, "natali"));
        assert!(matches_search(&r, "cm98"));
        assert!(matches_search(&r, "oakland"));
        assert!(matches_search(&r, "landing"));
        assert!(!matches_search(&r, "denver"));
    }

    #[test]
    fn test_search_ignores_status_and_date() {
        let r = record("#CM9801", "Natali Craig", OrderStatus::Pending);
        assert!(!matches_search(&r, "pending"));
        assert!(!matches_search(&r, "2024"));
    }

    // === status ===

    #[test]
    fn test_empty_status_filter_keeps_all() {
        let r = record("#1", "A", OrderStatus::Rejected);
        assert!(matches_status(&r, &IndexSet::new()));
    }

    #[test]
    fn test_status_filter_membership() {
        let r = record("#1", "A", OrderStatus::Rejected);
        let selected: IndexSet<_> = [OrderStatus::Pending].into_iter().collect();
        assert!(!matches_status(&r, &selected));
        let selected: IndexSet<_> = [OrderStatus::Pending, OrderStatus::Rejected]
            .into_iter()
            .collect();
        assert!(matches_status(&r, &selected));
    }

    // === date window ===

    #[test]
    fn test_today_window() {
        let w = DateWindow::for_range(DateRange::Today, midnight());
        assert!(w.contains(Some(midnight())));
        assert!(!w.contains(Some(midnight() - Duration::seconds(1))));
    }

    #[test]
    fn test_yesterday_window_is_half_open() {
        let w = DateWindow::for_range(DateRange::Yesterday, midnight());
        assert!(w.contains(Some(midnight() - Duration::days(1))));
        assert!(w.contains(Some(midnight() - Duration::seconds(1))));
        assert!(!w.contains(Some(midnight())));
        assert!(!w.contains(Some(midnight() - Duration::days(1) - Duration::seconds(1))));
    }

    #[test]
    fn test_last_n_days() {
        let w = DateWindow::for_range(DateRange::Last7Days, midnight());
        assert!(w.contains(Some(midnight() - Duration::days(7))));
        assert!(!w.contains(Some(midnight() - Duration::days(8))));

        let w = DateWindow::for_range(DateRange::Last30Days, midnight());
        assert!(w.contains(Some(midnight() - Duration::days(30))));
        assert!(!w.contains(Some(midnight() - Duration::days(31))));
    }

    #[test]
    fn test_malformed_dates_only_pass_all_time() {
        for range in DateRange::ALL {
            let w = DateWindow::for_range(range, midnight());
            assert_eq!(w.contains(None), range == DateRange::AllTime, "{:?}", range);
        }
    }
}
