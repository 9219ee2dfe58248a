//! JSON Export functionality
//!
//! Exports the stored expenses (optionally one date range) to JSON with
//! schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, Expense, Money};
use crate::storage::{ExpenseQuery, Storage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported expenses, ordered by date
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Date range covered, e.g. "all time"
    pub period: String,

    pub expense_count: usize,

    /// Sum of all amounts, in cents
    pub total_amount: Money,

    /// Distinct category labels among the exported expenses
    pub categories: Vec<String>,

    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build an export of the expenses in `range`
    pub fn from_storage(storage: &Storage, range: DateRange) -> ExpenseResult<Self> {
        let expenses = storage
            .expenses()
            .query(&ExpenseQuery::new().range(range))?;

        let mut categories: Vec<String> = expenses.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();

        // Records come back in date order
        let metadata = ExportMetadata {
            period: range.to_string(),
            expense_count: expenses.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            categories,
            earliest_expense: expenses.first().map(|e| e.date.to_string()),
            latest_expense: expenses.last().map(|e| e.date.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        })
    }
}

/// Export the expenses in `range` to JSON, returning the number of expenses written
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    range: DateRange,
    pretty: bool,
) -> ExpenseResult<usize> {
    let export = FullExport::from_storage(storage, range)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.metadata.expense_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn seeded_storage() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        for (day, category, cents) in [(15, "Groceries", 5000), (3, "Rent", 80000)] {
            let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
            let expense = NewExpense::new(date, category, Money::from_cents(cents)).unwrap();
            storage.expenses().add(&expense).unwrap();
        }
        storage
    }

    #[test]
    fn test_full_export() {
        let storage = seeded_storage();
        let export = FullExport::from_storage(&storage, DateRange::all_time()).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.metadata.total_amount.cents(), 85000);
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2025-01-03"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2025-01-15"));
        assert_eq!(export.metadata.categories, vec!["Groceries", "Rent"]);
    }

    #[test]
    fn test_json_output_parses_back() {
        let storage = seeded_storage();

        let mut json_output = Vec::new();
        let count = export_full_json(&storage, &mut json_output, DateRange::all_time(), true).unwrap();
        assert_eq!(count, 2);

        let parsed: FullExport = serde_json::from_slice(&json_output).unwrap();
        assert_eq!(parsed.expenses, storage.expenses().all().unwrap());
    }

    #[test]
    fn test_export_limited_to_range() {
        let storage = seeded_storage();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
        .unwrap();

        let export = FullExport::from_storage(&storage, range).unwrap();
        assert_eq!(export.expenses.len(), 1);
        assert_eq!(export.expenses[0].category, "Groceries");
        assert_eq!(export.metadata.categories, vec!["Groceries"]);
        assert_eq!(export.metadata.period, "2025-01-10 to 2025-01-31");
    }

    #[test]
    fn test_empty_export() {
        let storage = Storage::open_in_memory().unwrap();
        let export = FullExport::from_storage(&storage, DateRange::all_time()).unwrap();

        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }
}
