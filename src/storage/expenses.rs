//! Expense repository over SQLite
//!
//! All statements are parameterized. Dates are stored as ISO 8601 text so
//! lexical comparison matches chronological order.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::error::ExpenseResult;
use crate::models::{DateRange, Expense, ExpenseId, Money, NewExpense, DATE_FORMAT};

/// Selection criteria for expense queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    /// Inclusive date range (None means all dates)
    pub range: Option<DateRange>,
    /// Exact category label
    pub category: Option<String>,
}

impl ExpenseQuery {
    /// Create a query matching every expense
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to an inclusive date range
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = if range.is_all_time() { None } else { Some(range) };
        self
    }

    /// Restrict to one category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the WHERE clause and its bound values
    fn where_clause(&self) -> (String, Vec<String>) {
        let mut conditions = Vec::new();
        let mut values = Vec::new();

        if let Some(range) = &self.range {
            conditions.push(format!(
                "date BETWEEN ?{} AND ?{}",
                values.len() + 1,
                values.len() + 2
            ));
            values.push(range.start.format(DATE_FORMAT).to_string());
            values.push(range.end.format(DATE_FORMAT).to_string());
        }

        if let Some(category) = &self.category {
            conditions.push(format!("category = ?{}", values.len() + 1));
            values.push(category.clone());
        }

        if conditions.is_empty() {
            (String::new(), values)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), values)
        }
    }
}

/// Aggregated amount for one group key (category or month)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub key: String,
    pub total: Money,
    pub count: usize,
}

/// Repository for expense persistence
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    /// Create a repository over an open connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new expense and return its assigned id
    pub fn add(&self, expense: &NewExpense) -> ExpenseResult<ExpenseId> {
        // Re-check invariants for callers that built the struct by hand
        let expense = NewExpense::new(expense.date, expense.category.clone(), expense.amount)?;

        self.conn.execute(
            "INSERT INTO expenses (date, category, amount) VALUES (?1, ?2, ?3)",
            params![
                expense.date.format(DATE_FORMAT).to_string(),
                expense.category,
                expense.amount.to_decimal()
            ],
        )?;

        Ok(ExpenseId::new(self.conn.last_insert_rowid()))
    }

    /// Delete the given expenses, ignoring ids that don't exist
    ///
    /// Returns the number of rows removed. When the table ends up empty the
    /// id counter is reset so numbering restarts at 1.
    pub fn delete(&self, ids: &[ExpenseId]) -> ExpenseResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        let mut removed = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM expenses WHERE id = ?1")?;
            for id in ids {
                removed += stmt.execute([id.get()])?;
            }
        }

        let remaining: i64 = tx.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        if remaining == 0 {
            tx.execute("DELETE FROM sqlite_sequence WHERE name = 'expenses'", [])?;
        }
        tx.commit()?;

        Ok(removed)
    }

    /// Delete every expense and reset the id counter
    pub fn delete_all(&self) -> ExpenseResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM expenses", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'expenses'", [])?;
        tx.commit()?;
        Ok(removed)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let expense = self
            .conn
            .query_row(
                "SELECT id, date, category, amount FROM expenses WHERE id = ?1",
                [id.get()],
                row_to_expense,
            )
            .optional()?;
        Ok(expense)
    }

    /// Expenses matching a query, ordered by date then id
    pub fn query(&self, query: &ExpenseQuery) -> ExpenseResult<Vec<Expense>> {
        let (where_clause, values) = query.where_clause();
        let sql = format!(
            "SELECT id, date, category, amount FROM expenses{} ORDER BY date ASC, id ASC",
            where_clause
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), row_to_expense)?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?);
        }
        Ok(expenses)
    }

    /// Expenses in an inclusive date range, optionally for one category
    pub fn query_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<&str>,
    ) -> ExpenseResult<Vec<Expense>> {
        let mut query = ExpenseQuery::new().range(DateRange::new(start, end)?);
        if let Some(category) = category {
            query = query.category(category);
        }
        self.query(&query)
    }

    /// Every stored expense
    pub fn all(&self) -> ExpenseResult<Vec<Expense>> {
        self.query(&ExpenseQuery::new())
    }

    /// Count stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct category labels, sorted
    pub fn categories(&self) -> ExpenseResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM expenses ORDER BY category COLLATE NOCASE")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    /// Totals grouped by category, largest first
    pub fn sum_by_category(&self, query: &ExpenseQuery) -> ExpenseResult<Vec<GroupTotal>> {
        self.grouped(query, "category", "total_cents DESC, key ASC")
    }

    /// Totals grouped by month (`YYYY-MM`), chronological
    pub fn sum_by_month(&self, query: &ExpenseQuery) -> ExpenseResult<Vec<GroupTotal>> {
        self.grouped(query, "strftime('%Y-%m', date)", "key ASC")
    }

    fn grouped(
        &self,
        query: &ExpenseQuery,
        key_expr: &str,
        order_by: &str,
    ) -> ExpenseResult<Vec<GroupTotal>> {
        let (where_clause, values) = query.where_clause();
        // Sum whole cents so the aggregate is exact
        let sql = format!(
            "SELECT {key} AS key, SUM(CAST(ROUND(amount * 100) AS INTEGER)) AS total_cents, COUNT(*)
             FROM expenses{filter} GROUP BY key ORDER BY {order}",
            key = key_expr,
            filter = where_clause,
            order = order_by
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            Ok(GroupTotal {
                key: row.get(0)?,
                total: Money::from_cents(row.get(1)?),
                count: row.get::<_, i64>(2)? as usize,
            })
        })?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }
        Ok(totals)
    }
}

/// Map a `SELECT id, date, category, amount` row to an Expense
fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let date_text: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
    })?;

    Ok(Expense {
        id: ExpenseId::new(row.get(0)?),
        date,
        category: row.get(2)?,
        amount: Money::from_decimal(row.get(3)?),
    })
}
