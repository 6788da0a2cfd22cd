pub mod json_backend;

use crate::errors::Result;
use crate::expense::ExpenseStore;

/// Abstraction over persistence backends for the expense store.
///
/// The store is always persisted wholesale: `load` reads the complete
/// collection, `save` overwrites the backing file with the complete
/// collection. There is no append path and no partial update.
pub trait StorageBackend {
    fn load(&self) -> Result<ExpenseStore>;
    fn save(&self, store: &ExpenseStore) -> Result<()>;
}

pub use json_backend::{JsonStorage, DEFAULT_BACKING_FILE};
