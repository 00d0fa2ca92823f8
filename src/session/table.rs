//! Caller-owned state of the orders table
//!
//! The query engine is stateless; this is where the current query, the
//! selected rows and the "reset to the first page" rules live.

use crate::core::order::OrderStatus;
use crate::core::query::{DateRange, QuerySpec, SortColumn, SortDirection};
use indexmap::IndexSet;

/// Interaction state for one orders table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSession {
    spec: QuerySpec,
    selected: IndexSet<String>,
}

impl TableSession {
    pub fn new(spec: QuerySpec) -> Self {
        Self {
            spec,
            selected: IndexSet::new(),
        }
    }

    /// The query to hand to the engine for the next render
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    // === Sorting ===

    /// Handle a click on a column header
    ///
    /// Clicking the active column cycles ascending, descending, unsorted.
    /// Clicking another column starts it ascending. Always returns to page 0.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.spec.sort_column == Some(column) {
            let next = self.spec.sort_direction.next();
            self.spec.sort_direction = next;
            if next == SortDirection::None {
                self.spec.sort_column = None;
            }
        } else {
            self.spec.sort_column = Some(column);
            self.spec.sort_direction = SortDirection::Ascending;
        }
        self.spec.page = 0;
    }

    /// Drop the sort; keeps the current page
    pub fn clear_sort(&mut self) {
        self.spec.sort_column = None;
        self.spec.sort_direction = SortDirection::None;
    }

    // === Filtering ===

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.spec.search_text = text.into();
        self.spec.page = 0;
    }

    pub fn set_status_filter(&mut self, statuses: impl IntoIterator<Item = OrderStatus>) {
        self.spec.status_filter = statuses.into_iter().collect();
        self.spec.page = 0;
    }

    /// Add or remove one status from the filter
    pub fn toggle_status(&mut self, status: OrderStatus) {
        if !self.spec.status_filter.shift_remove(&status) {
            self.spec.status_filter.insert(status);
        }
        self.spec.page = 0;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.spec.date_range = range;
        self.spec.page = 0;
    }

    /// Reset status and date filters
    pub fn clear_filters(&mut self) {
        self.spec.status_filter.clear();
        self.spec.date_range = DateRange::AllTime;
        self.spec.page = 0;
    }

    pub fn has_active_filters(&self) -> bool {
        self.spec.has_active_filters()
    }

    // === Pagination ===

    pub fn set_page(&mut self, page: usize) {
        self.spec.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.spec.page_size = page_size.max(1);
        self.spec.page = 0;
    }

    // === Selection ===

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select or deselect one row
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.shift_remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Header checkbox: select every row on the page, or clear if all are already selected
    pub fn toggle_select_all<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str>) {
        let ids: Vec<&str> = page_ids.into_iter().collect();
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(*id)) {
            self.selected.clear();
        } else {
            self.selected = ids.into_iter().map(str::to_string).collect();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected ids, in selection order
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
