pub mod record;
pub mod store;

pub use record::{ExpenseRecord, DATE_FORMAT};
pub use store::ExpenseStore;
