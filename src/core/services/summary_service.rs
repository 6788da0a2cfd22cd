use std::collections::BTreeMap;

use crate::errors::Result;
use crate::expense::ExpenseStore;

pub struct SummaryService;

impl SummaryService {
    /// Totals per `(year, month)`, keyed chronologically.
    ///
    /// Fails as a whole if any record's date does not parse; a partial
    /// summary over a half-readable store would be misleading.
    pub fn monthly_totals(store: &ExpenseStore) -> Result<BTreeMap<(i32, u32), f64>> {
        let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for record in store.records() {
            let key = record.month_key()?;
            *totals.entry(key).or_insert(0.0) += record.amount;
        }
        Ok(totals)
    }
}
