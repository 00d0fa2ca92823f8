//! Column comparators for the orders table

use crate::core::order::OrderRecord;
use crate::core::query::{SortColumn, SortDirection};
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

/// Locale-style string comparison
///
/// Letters compare case-insensitively first; when two strings differ only
/// in case, lowercase sorts before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

/// A record paired with its date sort key, so dates are parsed once per query
#[derive(Debug, Clone, Copy)]
pub struct Keyed<'a> {
    pub record: &'a OrderRecord,
    /// Resolved date, or the query's `now` when the raw date is unresolvable
    pub date: DateTime<FixedOffset>,
}

/// Ascending comparison of two rows by `column`
pub fn compare(column: SortColumn, a: &Keyed<'_>, b: &Keyed<'_>) -> Ordering {
    match column {
        SortColumn::OrderId => locale_cmp(&a.record.order_id, &b.record.order_id),
        SortColumn::User => locale_cmp(&a.record.user.name, &b.record.user.name),
        SortColumn::Project => locale_cmp(&a.record.project, &b.record.project),
        SortColumn::Address => locale_cmp(&a.record.address, &b.record.address),
        SortColumn::Date => a.date.cmp(&b.date),
        SortColumn::Status => a.record.status.severity().cmp(&b.record.status.severity()),
    }
}

/// Stable in-place sort; equal keys keep their incoming order in both directions
pub fn sort_rows(rows: &mut [Keyed<'_>], column: SortColumn, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| compare(column, a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| compare(column, a, b).reverse()),
        SortDirection::None => {}
    }
}
