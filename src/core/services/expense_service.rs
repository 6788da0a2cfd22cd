use crate::errors::Result;
use crate::expense::{ExpenseRecord, ExpenseStore};

pub struct ExpenseService;

impl ExpenseService {
    /// Validates the raw input and appends a new record at the end of the
    /// store. On validation failure the store is left untouched.
    pub fn add(
        store: &mut ExpenseStore,
        date: &str,
        description: &str,
        category: &str,
        amount: &str,
    ) -> Result<()> {
        let record = ExpenseRecord::new(date, description, category, amount)?;
        store.push(record);
        Ok(())
    }

    /// Removes the record at `index` (zero-based) and returns it.
    pub fn remove(store: &mut ExpenseStore, index: usize) -> Result<ExpenseRecord> {
        store.remove(index)
    }

    /// Lazy listing of the store as numbered human-readable rows, one per
    /// record, in store order. The iterator borrows the store and is `Clone`,
    /// so a caller can restart it without rebuilding anything.
    pub fn list(store: &ExpenseStore) -> impl Iterator<Item = String> + Clone + '_ {
        store.records().iter().enumerate().map(|(index, record)| {
            format!(
                "{:>3}. {}  {:<24} {:<12} ${:>9.2}",
                index + 1,
                record.date,
                record.description,
                record.category,
                record.amount
            )
        })
    }
}
