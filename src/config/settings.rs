//! User settings for the expense tracker
//!
//! Manages user preferences including display options and the spending
//! recommendation rules.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::ExpenseError;
use crate::models::DATE_FORMAT;
use crate::reports::recommendations::RecommendationRule;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for display
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Discretionary spending rules evaluated by the recommendations report
    #[serde(default = "RecommendationRule::defaults")]
    pub recommendation_rules: Vec<RecommendationRule>,

    /// Message shown when no rule is triggered
    #[serde(default = "default_encouragement")]
    pub encouragement: String,
}

/// Newest settings layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

/// Format a date with a strftime pattern, or None if the pattern can't
/// render a plain date
fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

fn default_encouragement() -> String {
    "You're doing great! Keep up the good work.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recommendation_rules: RecommendationRule::defaults(),
            encouragement: default_encouragement(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let settings: Settings = read_json(&settings_path).map_err(|e| {
            ExpenseError::Config(format!("Failed to parse settings file: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Format a date for display using the configured pattern
    ///
    /// Falls back to `YYYY-MM-DD` if the pattern can't render a date.
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(DATE_FORMAT).to_string())
    }

    /// Reject settings that could never be applied sensibly
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.schema_version > SETTINGS_SCHEMA_VERSION {
            return Err(ExpenseError::Config(format!(
                "Settings schema version {} is newer than supported version {}",
                self.schema_version, SETTINGS_SCHEMA_VERSION
            )));
        }

        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or(NaiveDate::MIN);
        if try_format_date(sample, &self.date_format).is_none() {
            return Err(ExpenseError::Config(format!(
                "Invalid date format '{}': only date fields (like %Y, %m, %d) are allowed",
                self.date_format
            )));
        }

        for rule in &self.recommendation_rules {
            if rule.pattern.trim().is_empty() {
                return Err(ExpenseError::Config(format!(
                    "Recommendation rule '{}' has an empty pattern",
                    rule.label
                )));
            }
            if !(0.0..=100.0).contains(&rule.threshold_percent) {
                return Err(ExpenseError::Config(format!(
                    "Recommendation rule '{}' threshold must be between 0 and 100, got {}",
                    rule.label, rule.threshold_percent
                )));
            }
        }
        Ok(())
    }
}
