//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain:
//! expense records, money amounts and date ranges.

pub mod expense;
pub mod money;
pub mod period;

pub use expense::{parse_date, Expense, ExpenseId, NewExpense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use period::{DateRange, Month};
