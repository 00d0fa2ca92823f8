//! Record source trait consumed by the table query engine

use crate::core::order::OrderRecord;
use std::sync::Arc;

/// Anything that can hand the query engine a read-only slice of records
///
/// The engine never mutates what it reads; queries produce new views.
pub trait RecordSource: Send + Sync {
    /// All records, in source order (unfiltered, unsorted)
    fn records(&self) -> &[OrderRecord];

    /// Number of records in the source
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the source holds no records
    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl RecordSource for Vec<OrderRecord> {
    fn records(&self) -> &[OrderRecord] {
        self
    }
}

impl RecordSource for [OrderRecord] {
    fn records(&self) -> &[OrderRecord] {
        self
    }
}

impl RecordSource for Arc<[OrderRecord]> {
    fn records(&self) -> &[OrderRecord] {
        self
    }
}
