use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};

/// Calendar date format used everywhere: backing file, prompts, summaries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense entry. The backing file stores exactly these four fields.
///
/// The date is kept as the validated input string rather than a parsed
/// `NaiveDate` so that a hand-edited backing file still loads as long as the
/// shape is right; unparseable dates surface later, when a summary needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl ExpenseRecord {
    /// Builds a record from raw user input, validating the date format and
    /// that the amount parses as a non-negative number.
    pub fn new(date: &str, description: &str, category: &str, amount: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;
        Ok(Self {
            date,
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            amount,
        })
    }

    /// Year and month of this record's date, for monthly grouping.
    pub fn month_key(&self) -> Result<(i32, u32)> {
        let parsed = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            ExpenseError::Validation(format!("record date `{}` is not a valid date", self.date))
        })?;
        Ok((parsed.year(), parsed.month()))
    }
}

/// Validates a `YYYY-MM-DD` date string and returns its canonical form.
pub fn parse_date(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!(
            "`{trimmed}` is not a valid date (expected YYYY-MM-DD)"
        ))
    })?;
    Ok(parsed.format(DATE_FORMAT).to_string())
}

/// Parses an amount entered by the user; must be a finite number >= 0.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("`{trimmed}` is not a number")))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ExpenseError::Validation(format!(
            "amount must be a non-negative number, got `{trimmed}`"
        )));
    }
    Ok(amount)
}
