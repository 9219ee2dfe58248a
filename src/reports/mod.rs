//! Reports module for the expense tracker
//!
//! Provides the spending summary (totals by category and month) and the
//! threshold recommendations evaluated against it.

pub mod recommendations;
pub mod spending;

pub use recommendations::{Recommendation, RecommendationReport, RecommendationRule};
pub use spending::{SpendingByCategory, SpendingByMonth, SpendingReport};
