//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation of user input and logging of mutations.

pub mod expense;

pub use expense::{ExpenseFilter, ExpenseService};
