use std::path::PathBuf;

use thiserror::Error;

/// Error type covering every failure the expense tracker can report.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Malformed user input: non-numeric or negative amount, malformed date.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Removal target does not exist in the current store.
    #[error("no expense at position {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Backing file exists but cannot be read as a list of expense records.
    #[error("backing file `{}` is corrupt: {detail}", .path.display())]
    StorageCorrupt { path: PathBuf, detail: String },

    /// I/O failure while writing the backing file.
    #[error("failed to write backing file `{}`: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
