//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{DateRange, Expense, Money, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.get(),
        date: e.date.format(DATE_FORMAT).to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    format!(
        "Expense:  {}\nDate:     {}\nCategory: {}\nAmount:   {}\n",
        expense.id,
        expense.date.format(DATE_FORMAT),
        expense.category,
        expense.amount.format_with_symbol(currency)
    )
}

/// One-line total for a period, e.g. "Total from 2024-01-01 to 2024-01-31: $12.00"
pub fn format_period_total(range: &DateRange, total: Money, currency: &str) -> String {
    if range.is_all_time() {
        format!("Total: {}", total.format_with_symbol(currency))
    } else {
        format!(
            "Total from {} to {}: {}",
            range.start,
            range.end,
            total.format_with_symbol(currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, NewExpense};
    use chrono::NaiveDate;

    fn expense(id: i64, category: &str, cents: i64) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        NewExpense::new(date, category, Money::from_cents(cents))
            .unwrap()
            .with_id(ExpenseId::new(id))
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses found.");
    }

    #[test]
    fn test_table_contains_rows() {
        let table = format_expense_table(&[expense(1, "Food", 1250), expense(2, "Rent", 90000)], "$");
        assert!(table.contains("Category"));
        assert!(table.contains("Food"));
        assert!(table.contains("$12.50"));
        assert!(table.contains("$900.00"));
        assert!(table.contains("2024-04-02"));
    }

    #[test]
    fn test_period_total() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
        assert_eq!(
            format_period_total(&range, Money::from_cents(1200), "$"),
            "Total from 2024-01-01 to 2024-01-31: $12.00"
        );
        assert_eq!(
            format_period_total(&DateRange::all_time(), Money::from_cents(5), "$"),
            "Total: $0.05"
        );
    }

    #[test]
    fn test_details() {
        let text = format_expense_details(&expense(7, "Books", 999), "€");
        assert!(text.contains("Expense:  7"));
        assert!(text.contains("€9.99"));
    }
}
