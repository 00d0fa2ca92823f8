//! Query description and pagination types for the orders table

use crate::core::order::{OrderRecord, OrderStatus};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column the table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    OrderId,
    User,
    Project,
    Address,
    Date,
    Status,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::OrderId,
        SortColumn::User,
        SortColumn::Project,
        SortColumn::Address,
        SortColumn::Date,
        SortColumn::Status,
    ];
}

/// Sort direction; `None` keeps the filtered order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// Next direction when the same column header is clicked again
    ///
    /// Cycles `Ascending -> Descending -> None -> Ascending`.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }
}

/// Relative date window applied to record dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "Today")]
    Today,
    #[serde(rename = "Yesterday")]
    Yesterday,
    #[serde(rename = "Last 7 days")]
    Last7Days,
    #[serde(rename = "Last 30 days")]
    Last30Days,
    #[default]
    #[serde(rename = "All time")]
    AllTime,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Today,
        DateRange::Yesterday,
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Yesterday => "Yesterday",
            DateRange::Last7Days => "Last 7 days",
            DateRange::Last30Days => "Last 30 days",
            DateRange::AllTime => "All time",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown date range: {}", s))
    }
}

/// One query over the orders table
///
/// Built fresh by the caller on every interaction. The engine keeps no state.
///
/// # Example
/// ```
/// use dashboard::core::query::{QuerySpec, SortColumn, SortDirection};
/// use dashboard::core::order::OrderStatus;
///
/// let spec = QuerySpec::default()
///     .with_search("natali")
///     .with_statuses([OrderStatus::Pending, OrderStatus::Rejected])
///     .with_sort(SortColumn::Status, SortDirection::Ascending);
/// assert_eq!(spec.page, 0);
/// assert_eq!(spec.page_size(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuerySpec {
    /// Case-insensitive substring searched in order id, user, project and address
    pub search_text: String,

    /// Statuses to keep; empty means no status filter
    pub status_filter: IndexSet<OrderStatus>,

    pub date_range: DateRange,

    pub sort_column: Option<SortColumn>,

    pub sort_direction: SortDirection,

    /// Zero-based page number
    pub page: usize,

    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    10
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status_filter: IndexSet::new(),
            date_range: DateRange::AllTime,
            sort_column: None,
            sort_direction: SortDirection::None,
            page: 0,
            page_size: default_page_size(),
        }
    }
}

impl QuerySpec {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        self.status_filter = statuses.into_iter().collect();
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_column = Some(column);
        self.sort_direction = direction;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Rows per page, never less than one
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// The active sort, if both a column and a direction are set
    pub fn active_sort(&self) -> Option<(SortColumn, SortDirection)> {
        match (self.sort_column, self.sort_direction) {
            (Some(column), SortDirection::Ascending | SortDirection::Descending) => {
                Some((column, self.sort_direction))
            }
            _ => None,
        }
    }

    /// Whether any status or date filter narrows the result
    pub fn has_active_filters(&self) -> bool {
        !self.status_filter.is_empty() || self.date_range != DateRange::AllTime
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Records on the requested page, in sorted order
    pub items: Vec<OrderRecord>,

    /// Number of records that passed search and filters, across all pages
    pub total_matched: usize,
}

impl Page {
    /// Pagination metadata for this page
    pub fn meta(&self, spec: &QuerySpec) -> PaginationMeta {
        PaginationMeta::new(spec.page, spec.page_size(), self.total_matched)
    }

    /// Ids of the records on this page
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 0)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = page.saturating_mul(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page > 0,
        }
    }

    /// One-based index of the first row on the page, as shown in "1–10 of 15"
    pub fn first_row(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.page.saturating_mul(self.page_size).saturating_add(1).min(self.total)
        }
    }

    /// One-based index of the last row on the page
    pub fn last_row(&self) -> usize {
        self.page.saturating_add(1).saturating_mul(self.page_size).min(self.total)
    }
}
