//! Spending Report
//!
//! Aggregates expenses for a date range into a total, per-category sums
//! with their share of the total, and per-month sums.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, Expense, Money};
use crate::storage::{ExpenseQuery, Storage};
use std::collections::BTreeMap;
use std::io::Write;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    /// Category label
    pub category: String,
    /// Total spent in this category
    pub total: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingByMonth {
    /// Month key (`YYYY-MM`)
    pub month: String,
    pub total: Money,
    pub expense_count: usize,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Period covered
    pub range: DateRange,
    /// Categories, most spending first
    pub categories: Vec<SpendingByCategory>,
    /// Months in chronological order
    pub months: Vec<SpendingByMonth>,
    /// Total spending across all categories
    pub total_spending: Money,
    /// Total expense count
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a spending report for a date range
    pub fn generate(storage: &Storage, range: DateRange) -> ExpenseResult<Self> {
        let expenses = storage
            .expenses()
            .query(&ExpenseQuery::new().range(range))?;
        Ok(Self::from_expenses(range, &expenses))
    }

    /// Build a report from records already in memory
    pub fn from_expenses(range: DateRange, expenses: &[Expense]) -> Self {
        let mut by_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        let mut by_month: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        let mut total_spending = Money::zero();

        for expense in expenses {
            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;

            let entry = by_month
                .entry(expense.month_key())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;

            total_spending += expense.amount;
        }

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, (total, count))| SpendingByCategory {
                category: category.to_string(),
                total,
                expense_count: count,
                percentage: total.percentage_of(total_spending),
            })
            .collect();

        // Most spending first; BTreeMap order breaks ties by name
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        let months = by_month
            .into_iter()
            .map(|(month, (total, count))| SpendingByMonth {
                month,
                total,
                expense_count: count,
            })
            .collect();

        Self {
            range,
            categories,
            months,
            total_spending,
            total_expenses: expenses.len(),
        }
    }

    /// Whether the period had no expenses
    pub fn is_empty(&self) -> bool {
        self.total_expenses == 0
    }

    /// Get the spending line for a category, if any
    pub fn category(&self, name: &str) -> Option<&SpendingByCategory> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        self.categories.iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Report: {}\n", self.range));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total_spending.format_with_symbol(currency)
        ));
        output.push_str(&format!("Total Expenses: {}\n\n", self.total_expenses));

        if self.is_empty() {
            output.push_str("No expenses recorded for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>8} {:>7.1}%\n",
                category.category,
                category.total.format_with_symbol(currency),
                category.expense_count,
                category.percentage
            ));
        }

        output.push_str("\nBy Month\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<30} {:>12} {:>8}\n",
                month.month,
                month.total.format_with_symbol(currency),
                month.expense_count
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>8}\n",
            "TOTAL SPENDING",
            self.total_spending.format_with_symbol(currency),
            self.total_expenses
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["Period", "Category", "Amount", "Expense Count", "Percentage"])?;

        let period = self.range.to_string();
        for category in &self.categories {
            csv_writer.write_record([
                period.as_str(),
                category.category.as_str(),
                &format!("{:.2}", category.total.to_decimal()),
                &category.expense_count.to_string(),
                &format!("{:.2}", category.percentage),
            ])?;
        }

        let total_percentage = if self.is_empty() { "0.00" } else { "100.00" };
        csv_writer.write_record([
            period.as_str(),
            "TOTAL",
            &format!("{:.2}", self.total_spending.to_decimal()),
            &self.total_expenses.to_string(),
            total_percentage,
        ])?;

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_storage() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        let rows = [
            (date(2025, 1, 10), "Groceries", 5000),
            (date(2025, 1, 15), "Dining Out", 3000),
            (date(2025, 2, 2), "Groceries", 2000),
            (date(2025, 3, 1), "Rent", 90000),
        ];
        for (d, category, cents) in rows {
            let expense = NewExpense::new(d, category, Money::from_cents(cents)).unwrap();
            storage.expenses().add(&expense).unwrap();
        }
        storage
    }

    #[test]
    fn test_generate_spending_report() {
        let storage = seeded_storage();
        let range = DateRange::new(date(2025, 1, 1), date(2025, 2, 28)).unwrap();

        let report = SpendingReport::generate(&storage, range).unwrap();

        assert_eq!(report.total_spending.cents(), 10000);
        assert_eq!(report.total_expenses, 3);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].category, "Groceries");
        assert_eq!(report.categories[0].expense_count, 2);
        assert!((report.categories[0].percentage - 70.0).abs() < 1e-9);

        let months: Vec<_> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2025-01", "2025-02"]);
        assert_eq!(report.months[0].total.cents(), 8000);
    }

    #[test]
    fn test_category_sums_equal_total() {
        let storage = seeded_storage();
        let report = SpendingReport::generate(&storage, DateRange::all_time()).unwrap();

        let sum: Money = report.categories.iter().map(|c| c.total).sum();
        assert_eq!(sum, report.total_spending);

        let month_sum: Money = report.months.iter().map(|m| m.total).sum();
        assert_eq!(month_sum, report.total_spending);

        let pct: f64 = report.categories.iter().map(|c| c.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = SpendingReport::from_expenses(DateRange::all_time(), &[]);
        assert!(report.is_empty());
        assert!(report.categories.is_empty());
        assert!(report.format_terminal("$").contains("No expenses recorded"));
    }

    #[test]
    fn test_top_categories() {
        let storage = seeded_storage();
        let report = SpendingReport::generate(&storage, DateRange::all_time()).unwrap();

        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "Rent");
        assert!(top[0].total >= top[1].total);
    }

    #[test]
    fn test_export_csv() {
        let storage = seeded_storage();
        let report = SpendingReport::generate(&storage, DateRange::all_time()).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Period,Category,Amount,Expense Count,Percentage\n"));
        assert!(text.contains("all time,Rent,900.00,1,"));
        assert!(text.contains("all time,TOTAL,1000.00,4,100.00"));
    }
}
