//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker built on ratatui:
//! an expenses table with add/delete, a reports view with recommendations,
//! a charts view, and dialogs for data entry, date filtering and export.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Commands
pub mod commands;

pub use app::App;
pub use terminal::run_tui;
