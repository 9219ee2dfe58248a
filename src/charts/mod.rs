//! SVG chart rendering
//!
//! Draws monthly totals as a bar chart or category totals as a pie chart
//! and writes the result to an `.svg` file. Both charts read the grouped
//! sums straight from the store.

pub mod bar;
pub mod pie;

use std::path::Path;

use clap::ValueEnum;
use svg::Document;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::DateRange;
use crate::storage::{ExpenseQuery, GroupTotal, Storage};

pub use bar::MonthlyBarChart;
pub use pie::CategoryPieChart;

/// Which chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Monthly spending as vertical bars
    Bar,
    /// Share of spending per category
    Pie,
}

impl ChartKind {
    /// Default file name for this chart
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Bar => "monthly_spending.svg",
            Self::Pie => "category_share.svg",
        }
    }
}

/// Canvas width in SVG user units
pub(crate) const WIDTH: f64 = 1000.0;
/// Canvas height in SVG user units
pub(crate) const HEIGHT: f64 = 700.0;
pub(crate) const MARGIN: f64 = 20.0;

pub(crate) const COLORS: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Escape text for use inside an SVG element
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Pick a palette color, cycling when there are more series than colors
pub(crate) fn color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Grouped totals a chart of `kind` is drawn from
pub fn chart_totals(
    storage: &Storage,
    kind: ChartKind,
    range: DateRange,
) -> ExpenseResult<Vec<GroupTotal>> {
    let query = ExpenseQuery::new().range(range);
    let repo = storage.expenses();
    match kind {
        ChartKind::Bar => repo.sum_by_month(&query),
        ChartKind::Pie => repo.sum_by_category(&query),
    }
}

/// Build the SVG document for one set of grouped totals
pub fn render(totals: &[GroupTotal], kind: ChartKind, currency: &str) -> Document {
    match kind {
        ChartKind::Bar => MonthlyBarChart::from_totals(totals).render(currency),
        ChartKind::Pie => CategoryPieChart::from_totals(totals).render(),
    }
}

/// Query the store, render the chart and write it to `path`
pub fn save_chart(
    storage: &Storage,
    kind: ChartKind,
    range: DateRange,
    currency: &str,
    path: &Path,
) -> ExpenseResult<()> {
    let totals = chart_totals(storage, kind, range)?;
    if totals.is_empty() {
        return Err(ExpenseError::Validation(format!(
            "No expenses to chart for {}",
            range
        )));
    }
    let document = render(&totals, kind, currency);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    svg::save(path, &document).map_err(|e| {
        ExpenseError::Export(format!("Failed to write chart {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), ?kind, groups = totals.len(), "chart written");
    Ok(())
}
