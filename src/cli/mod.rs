//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod chart;
pub mod expense;
pub mod export;
pub mod report;

pub use chart::{handle_chart_command, ChartArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};

use clap::Args;

use crate::error::ExpenseResult;
use crate::models::{parse_date, DateRange, Month};
use crate::services::ExpenseFilter;

/// Date selection shared by listing, reporting and export commands
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// A whole month (YYYY-MM); overrides --from/--to
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,
}

impl PeriodArgs {
    /// Resolve to a date range; no bounds means all time
    pub fn range(&self) -> ExpenseResult<DateRange> {
        if let Some(month) = &self.month {
            return Ok(Month::parse(month)?.range());
        }
        self.filter()?.range()
    }

    /// Build an expense filter covering the selected period
    pub fn filter(&self) -> ExpenseResult<ExpenseFilter> {
        if let Some(month) = &self.month {
            let range = Month::parse(month)?.range();
            return Ok(ExpenseFilter::new().date_range(range.start, range.end));
        }

        let mut filter = ExpenseFilter::new();
        if let Some(from) = &self.from {
            filter = filter.since(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.until(parse_date(to)?);
        }
        Ok(filter)
    }
}
