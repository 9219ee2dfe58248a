//! Expense model
//!
//! A single logged expense: when it happened, what it was for and how much
//! it cost. Records are immutable once stored; there is no edit operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for input, storage and export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a stored expense (the SQLite rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw row id
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix('#')
            .unwrap_or(trimmed)
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpenseError::Validation(format!("Invalid expense id: {}", s)))
    }
}

/// A stored expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// User-chosen category label
    pub category: String,

    /// Amount spent (always positive)
    pub amount: Money,
}

impl Expense {
    /// Month key (`YYYY-MM`) this expense falls into
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// A validated expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
}

impl NewExpense {
    /// Create a new expense, enforcing the record invariants
    ///
    /// The category is trimmed; an empty category or a non-positive amount
    /// is a validation error.
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> ExpenseResult<Self> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(ExpenseError::Validation("Category cannot be empty.".into()));
        }
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(
                "Invalid amount! Enter a positive number.".into(),
            ));
        }
        Ok(Self {
            date,
            category,
            amount,
        })
    }

    /// Build an expense from raw form/CLI text fields
    ///
    /// Fields are checked in form order (date, category, amount) so the
    /// first problem the user sees is the first field on screen.
    pub fn parse(date: &str, category: &str, amount: &str) -> ExpenseResult<Self> {
        let date = parse_date(date)?;
        if category.trim().is_empty() {
            return Err(ExpenseError::Validation("Category cannot be empty.".into()));
        }
        let amount = Money::parse_positive(amount).map_err(|_| {
            ExpenseError::Validation("Invalid amount! Enter a positive number.".into())
        })?;
        Self::new(date, category, amount)
    }

    /// Attach the id assigned by the store
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
        }
    }
}

/// Parse a `YYYY-MM-DD` date as entered by the user
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ExpenseError::Validation("Invalid date! Use YYYY-MM-DD format.".into()))
}
