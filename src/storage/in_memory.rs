//! Immutable in-memory record store

use crate::core::error::StoreError;
use crate::core::order::OrderRecord;
use crate::core::store::RecordSource;
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory order store
///
/// Records are loaded once and shared through an `Arc`, so clones are cheap
/// and every reader sees the same immutable data.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    records: Arc<[OrderRecord]>,
}

impl InMemoryOrderStore {
    /// Build a store, rejecting duplicate record ids
    pub fn new(records: Vec<OrderRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        tracing::debug!(count = records.len(), "Order store loaded");

        Ok(Self {
            records: records.into(),
        })
    }

    /// Decode a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records: Vec<OrderRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl RecordSource for InMemoryOrderStore {
    fn records(&self) -> &[OrderRecord] {
        &self.records
    }
}
