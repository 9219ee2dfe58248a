//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the CLI report commands and the
//! TUI reports view.

use crate::reports::SpendingReport;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Category shares drawn as horizontal bars
pub fn format_category_bars(report: &SpendingReport, currency: &str, width: usize) -> String {
    let max = report
        .categories
        .first()
        .map(|c| c.total.cents() as f64)
        .unwrap_or(0.0);

    let mut output = String::new();
    for category in &report.categories {
        output.push_str(&format!(
            "{:<20} {} {:>6} {:>12}\n",
            truncate(&category.category, 20),
            format_bar(category.total.cents() as f64, max, width),
            format_percentage(category.percentage),
            category.total.format_with_symbol(currency)
        ));
    }
    output.push_str(&separator(width + 42));
    output.push('\n');
    output
}
