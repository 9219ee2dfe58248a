//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for the
//! command-line interface.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table, format_period_total};
pub use report::{format_bar, format_category_bars, format_percentage, truncate};
