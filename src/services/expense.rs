//! Expense service
//!
//! Business logic over the expense store: validation of raw input, logging
//! of every mutation, and filtered listing.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DateRange, Expense, ExpenseId, Money, NewExpense};
use crate::storage::{ExpenseQuery, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by date range start
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end
    pub end_date: Option<NaiveDate>,
    /// Filter by exact category
    pub category: Option<String>,
    /// Keep only the most recent N expenses
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Filter by start date only
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Filter by end date only
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The date range this filter covers (open ends become unbounded)
    pub fn range(&self) -> ExpenseResult<DateRange> {
        let all = DateRange::all_time();
        DateRange::new(
            self.start_date.unwrap_or(all.start),
            self.end_date.unwrap_or(all.end),
        )
    }

    fn to_query(&self) -> ExpenseResult<ExpenseQuery> {
        let mut query = ExpenseQuery::new().range(self.range()?);
        if let Some(category) = &self.category {
            let category = category.trim();
            if !category.is_empty() {
                query = query.category(category);
            }
        }
        Ok(query)
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a validated expense
    pub fn add(&self, expense: NewExpense) -> ExpenseResult<Expense> {
        let id = self.storage.expenses().add(&expense)?;
        tracing::info!(
            id = id.get(),
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "expense added"
        );
        Ok(expense.with_id(id))
    }

    /// Validate raw form or command-line fields and store the expense
    pub fn add_from_input(
        &self,
        date: &str,
        category: &str,
        amount: &str,
    ) -> ExpenseResult<Expense> {
        let expense = NewExpense::parse(date, category, amount).map_err(|e| {
            tracing::debug!(error = %e, "rejected expense input");
            e
        })?;
        self.add(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage
            .expenses()
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Delete expenses by id; ids that don't exist are skipped
    pub fn delete(&self, ids: &[ExpenseId]) -> ExpenseResult<usize> {
        let removed = self.storage.expenses().delete(ids)?;
        tracing::info!(requested = ids.len(), removed, "expenses deleted");
        Ok(removed)
    }

    /// Delete every expense
    pub fn delete_all(&self) -> ExpenseResult<usize> {
        let removed = self.storage.expenses().delete_all()?;
        tracing::warn!(removed, "all expenses deleted");
        Ok(removed)
    }

    /// List expenses matching a filter, ordered by date
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses().query(&filter.to_query()?)?;

        if let Some(limit) = filter.limit {
            let skip = expenses.len().saturating_sub(limit);
            expenses.drain(..skip);
        }

        Ok(expenses)
    }

    /// Total amount of the expenses matching a filter
    pub fn total(&self, filter: &ExpenseFilter) -> ExpenseResult<Money> {
        let expenses = self.storage.expenses().query(&filter.to_query()?)?;
        Ok(expenses.iter().map(|e| e.amount).sum())
    }

    /// Known category labels
    pub fn categories(&self) -> ExpenseResult<Vec<String>> {
        self.storage.expenses().categories()
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses().count()
    }
}
