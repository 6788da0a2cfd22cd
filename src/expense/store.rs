use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};
use crate::expense::ExpenseRecord;

/// In-memory collection of expense records for one session, oldest first.
///
/// The store is the unit of persistence: it is loaded wholesale at startup
/// and written back wholesale after each mutation. Records are addressed by
/// position only; positions shift after a removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the end; insertion order is never re-sorted.
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record at `index` (zero-based), preserving the
    /// relative order of all other records.
    pub fn remove(&mut self, index: usize) -> Result<ExpenseRecord> {
        if index >= self.records.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }
}

impl From<Vec<ExpenseRecord>> for ExpenseStore {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: &str) -> ExpenseRecord {
        ExpenseRecord::new("2024-01-05", description, "misc", "1.00").unwrap()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut store = ExpenseStore::new();
        store.push(record("first"));
        store.push(record("second"));
        let descriptions: Vec<_> = store.records().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, ["first", "second"]);
    }

    #[test]
    fn remove_out_of_range_reports_index_and_len() {
        let mut store = ExpenseStore::new();
        store.push(record("only"));
        let err = store.remove(3).unwrap_err();
        match err {
            ExpenseError::IndexOutOfRange { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
