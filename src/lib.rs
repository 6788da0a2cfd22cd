#![doc(test(attr(deny(warnings))))]

//! Expense Core is a small single-user expense tracker: records live in
//! memory for the session and are persisted wholesale to a JSON backing file
//! between sessions.

pub mod cli;
pub mod core;
pub mod errors;
pub mod expense;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();

        tracing::info!("Expense Core tracing initialized.");
    });
}
