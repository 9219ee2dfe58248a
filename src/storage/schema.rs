//! Database schema
//!
//! Creates the expenses table on first open. Safe to run on every start.

use rusqlite::Connection;

use crate::error::ExpenseResult;

/// Name of the single table holding expense records
pub const EXPENSES_TABLE: &str = "expenses";

/// Create the schema if it doesn't exist yet
pub fn init_schema(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, table: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            > 0
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        assert!(table_exists(&conn, EXPENSES_TABLE));
    }

    #[test]
    fn test_autoincrement_sequence_table_created() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        assert!(table_exists(&conn, "sqlite_sequence"));
        assert!(!table_exists(&conn, "budgets"));
    }
}
