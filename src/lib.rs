//! Expense Tracker - personal expense logging with reports and charts
//!
//! This library provides the core functionality for the expense tracker:
//! a SQLite-backed expense store, spending summaries with threshold
//! recommendations, CSV/JSON/YAML export, SVG charts, and the terminal UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, date ranges)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `reports`: Spending summaries and recommendations
//! - `export`: CSV, JSON and YAML export
//! - `charts`: SVG bar and pie charts
//! - `display`: Terminal formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths)?;
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
