//! Stateless services implementing the tool's command operations over an
//! in-memory [`ExpenseStore`](crate::expense::ExpenseStore).

pub mod expense_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use summary_service::SummaryService;
