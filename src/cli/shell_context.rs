use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, CliMode, LoopControl};
use crate::cli::menus::MenuChoice;
use crate::cli::{io, output};
use crate::core::services::{ExpenseService, SummaryService};
use crate::errors::ExpenseError;
use crate::expense::record::{parse_amount, parse_date};
use crate::expense::{ExpenseStore, DATE_FORMAT};
use crate::storage::{JsonStorage, StorageBackend};

/// Session state for one shell run: the in-memory store, the storage backend
/// it syncs to, and the input mode.
pub struct ShellContext {
    mode: CliMode,
    theme: ColorfulTheme,
    storage: JsonStorage,
    store: ExpenseStore,
}

impl ShellContext {
    /// Opens the default backing file and loads the full store for the
    /// session. Creates an empty backing file on first run.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStorage::new_default();
        let store = storage.load()?;
        Ok(Self {
            mode,
            theme: ColorfulTheme::default(),
            storage,
            store,
        })
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Writes the full store back to the backing file. Storage failures are
    /// fatal for the session; there is no retry.
    pub fn persist(&self) -> Result<(), CliError> {
        self.storage.save(&self.store).map_err(CliError::from)
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<LoopControl, CliError> {
        tracing::debug!(?choice, "dispatching menu choice");
        match choice {
            MenuChoice::Add => self.cmd_add(),
            MenuChoice::View => {
                self.cmd_view();
                Ok(LoopControl::Continue)
            }
            MenuChoice::Remove => self.cmd_remove(),
            MenuChoice::Summary => {
                self.cmd_summary();
                Ok(LoopControl::Continue)
            }
            MenuChoice::Exit => {
                self.persist()?;
                Ok(LoopControl::Exit)
            }
        }
    }

    pub fn prompt(&self, label: &str, default: Option<&str>) -> Result<Option<String>, CliError> {
        io::prompt_line(self.mode, &self.theme, label, default)
    }

    /// Add flow: each field is prompted until it validates; end-of-input at
    /// any prompt exits the session.
    fn cmd_add(&mut self) -> Result<LoopControl, CliError> {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

        let date = loop {
            match self.prompt("Date (YYYY-MM-DD)", Some(&today))? {
                None => return Ok(LoopControl::Exit),
                Some(raw) => match parse_date(&raw) {
                    Ok(date) => break date,
                    Err(err) => output::warning(err),
                },
            }
        };

        let description = loop {
            match self.prompt("Description", None)? {
                None => return Ok(LoopControl::Exit),
                Some(raw) if raw.trim().is_empty() => {
                    output::warning("Description cannot be empty.")
                }
                Some(raw) => break raw,
            }
        };

        let category = loop {
            match self.prompt("Category (ex: food, travel, groceries)", None)? {
                None => return Ok(LoopControl::Exit),
                Some(raw) if raw.trim().is_empty() => output::warning("Category cannot be empty."),
                Some(raw) => break raw,
            }
        };

        let amount = loop {
            match self.prompt("Amount", None)? {
                None => return Ok(LoopControl::Exit),
                Some(raw) => match parse_amount(&raw) {
                    Ok(_) => break raw,
                    Err(err) => output::warning(err),
                },
            }
        };

        match ExpenseService::add(&mut self.store, &date, &description, &category, &amount) {
            Ok(()) => {
                self.persist()?;
                output::success("Expense added.");
            }
            Err(err) => output::warning(err),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_view(&self) {
        output::separator();
        if self.store.is_empty() {
            output::info("No expenses recorded yet.");
        } else {
            for row in ExpenseService::list(&self.store) {
                output::plain(row);
            }
        }
        output::separator();
    }

    /// Remove flow: shows the listing, then prompts for a 1-based position
    /// until the removal succeeds.
    fn cmd_remove(&mut self) -> Result<LoopControl, CliError> {
        if self.store.is_empty() {
            output::info("No expenses recorded yet.");
            return Ok(LoopControl::Continue);
        }
        self.cmd_view();

        loop {
            let raw = match self.prompt("Number of expense to remove", None)? {
                None => return Ok(LoopControl::Exit),
                Some(raw) => raw,
            };
            let position: usize = match raw.trim().parse() {
                Ok(position) => position,
                Err(_) => {
                    output::warning(format!("`{}` is not a valid number.", raw.trim()));
                    continue;
                }
            };
            if position == 0 {
                output::warning("Positions start at 1.");
                continue;
            }
            match ExpenseService::remove(&mut self.store, position - 1) {
                Ok(removed) => {
                    self.persist()?;
                    output::success(format!("Removed expense `{}`.", removed.description));
                    return Ok(LoopControl::Continue);
                }
                Err(err @ ExpenseError::IndexOutOfRange { .. }) => output::warning(err),
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn cmd_summary(&self) {
        match SummaryService::monthly_totals(&self.store) {
            Ok(totals) if totals.is_empty() => output::info("No expenses recorded yet."),
            Ok(totals) => {
                output::section("Monthly summary");
                for ((year, month), total) in totals {
                    output::plain(format!("  {year:04}-{month:02}  ${total:.2}"));
                }
            }
            Err(err) => output::error(err),
        }
    }
}
