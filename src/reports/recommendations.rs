//! Spending recommendations
//!
//! Each rule names a discretionary category and a threshold. A rule fires
//! when the categories it matches take strictly more than the threshold
//! share of total spending.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::spending::SpendingReport;
use crate::config::Settings;
use crate::models::Money;

/// A configurable threshold rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRule {
    /// Name shown in the recommendation
    pub label: String,

    /// Case-insensitive substring matched against category labels
    pub pattern: String,

    /// Share of total spending (percent) above which the rule fires
    pub threshold_percent: f64,

    /// Suggestion shown when the rule fires
    pub message: String,
}

impl RecommendationRule {
    pub fn new(
        label: impl Into<String>,
        pattern: impl Into<String>,
        threshold_percent: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
            threshold_percent,
            message: message.into(),
        }
    }

    /// The built-in discretionary rules
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Dining Out",
                "Dining Out",
                20.0,
                "Consider reducing spending on dining out to save more.",
            ),
            Self::new(
                "Entertainment",
                "Entertainment",
                15.0,
                "Think about cutting down on entertainment expenses.",
            ),
        ]
    }

    /// Check whether a category label falls under this rule
    pub fn matches(&self, category: &str) -> bool {
        category
            .to_lowercase()
            .contains(&self.pattern.trim().to_lowercase())
    }

    /// Whether `matched` is strictly more than the threshold share of `total`
    ///
    /// Cross-multiplied so no percentage is ever rounded:
    /// `matched * 100 > threshold * total`.
    pub fn exceeds(&self, matched: Money, total: Money) -> bool {
        if !total.is_positive() {
            return false;
        }
        matched.cents() as f64 * 100.0 > self.threshold_percent * total.cents() as f64
    }
}

/// A fired rule
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub label: String,
    pub spent: Money,
    pub share_percent: f64,
    pub threshold_percent: f64,
    pub message: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {:.1}% of spending (threshold {}%). {}",
            self.label, self.share_percent, self.threshold_percent, self.message
        )
    }
}

/// Outcome of evaluating all rules against a report
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub total_spending: Money,
    pub triggered: Vec<Recommendation>,
    /// Shown instead when nothing fired
    pub encouragement: String,
}

impl RecommendationReport {
    /// Evaluate rules against a spending report
    pub fn evaluate(
        report: &SpendingReport,
        rules: &[RecommendationRule],
        encouragement: impl Into<String>,
    ) -> Self {
        let total = report.total_spending;

        let triggered = rules
            .iter()
            .filter_map(|rule| {
                let spent: Money = report
                    .categories
                    .iter()
                    .filter(|c| rule.matches(&c.category))
                    .map(|c| c.total)
                    .sum();

                rule.exceeds(spent, total).then(|| Recommendation {
                    label: rule.label.clone(),
                    spent,
                    share_percent: spent.percentage_of(total),
                    threshold_percent: rule.threshold_percent,
                    message: rule.message.clone(),
                })
            })
            .collect();

        Self {
            total_spending: total,
            triggered,
            encouragement: encouragement.into(),
        }
    }

    /// Evaluate the rules configured in settings
    pub fn from_settings(report: &SpendingReport, settings: &Settings) -> Self {
        Self::evaluate(
            report,
            &settings.recommendation_rules,
            settings.encouragement.clone(),
        )
    }

    /// Lines to show the user
    pub fn messages(&self) -> Vec<String> {
        if self.triggered.is_empty() {
            vec![self.encouragement.clone()]
        } else {
            self.triggered.iter().map(|r| r.to_string()).collect()
        }
    }

    /// Format the recommendations for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("Recommendations\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        for line in self.messages() {
            output.push_str(&format!("- {}\n", line));
        }
        output
    }
}
