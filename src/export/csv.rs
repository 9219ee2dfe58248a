//! CSV Export functionality
//!
//! Writes one row per expense under an `ID,Date,Category,Amount` header.

use crate::error::ExpenseResult;
use crate::models::{DateRange, Expense, DATE_FORMAT};
use crate::storage::{ExpenseQuery, Storage};
use std::io::Write;

/// Header row, matching the columns of the expenses table
pub const CSV_HEADER: [&str; 4] = ["ID", "Date", "Category", "Amount"];

/// Write expenses as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.format(DATE_FORMAT).to_string(),
            expense.category.clone(),
            format!("{:.2}", expense.amount.to_decimal()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the expenses in a date range to CSV, returning how many were written
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    writer: W,
    range: DateRange,
) -> ExpenseResult<usize> {
    let expenses = storage
        .expenses()
        .query(&ExpenseQuery::new().range(range))?;
    write_expenses_csv(&expenses, writer)?;
    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense};
    use chrono::NaiveDate;

    fn storage_with(rows: &[(&str, &str, i64)]) -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        for (date, category, cents) in rows {
            let date = NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap();
            let expense = NewExpense::new(date, *category, Money::from_cents(*cents)).unwrap();
            storage.expenses().add(&expense).unwrap();
        }
        storage
    }

    #[test]
    fn test_export_expenses_csv() {
        let storage = storage_with(&[
            ("2025-01-15", "Groceries", 5000),
            ("2025-01-10", "Dining, Out", 1234),
        ]);

        let mut output = Vec::new();
        let count = export_expenses_csv(&storage, &mut output, DateRange::all_time()).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "ID,Date,Category,Amount");
        assert_eq!(lines[1], "2,2025-01-10,\"Dining, Out\",12.34");
        assert_eq!(lines[2], "1,2025-01-15,Groceries,50.00");
    }

    #[test]
    fn test_export_respects_range() {
        let storage = storage_with(&[("2025-01-15", "Food", 100), ("2025-03-01", "Food", 200)]);
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )
        .unwrap();

        let mut output = Vec::new();
        assert_eq!(export_expenses_csv(&storage, &mut output, range).unwrap(), 1);
        assert!(String::from_utf8(output).unwrap().contains("2025-03-01,Food,2.00"));
    }

    #[test]
    fn test_empty_export_has_header() {
        let storage = storage_with(&[]);
        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output, DateRange::all_time()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "ID,Date,Category,Amount\n");
    }
}
