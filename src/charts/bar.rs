//! Monthly spending bar chart

use svg::node::element::{Line, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use super::{color, escape_xml, HEIGHT, MARGIN, WIDTH};
use crate::models::Money;
use crate::storage::GroupTotal;

/// Space reserved under the bars for month labels
const LABEL_BAND: f64 = 40.0;
/// Space reserved above the bars for the title
const TITLE_BAND: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBarChart {
    bars: Vec<(String, Money)>,
}

impl MonthlyBarChart {
    /// One bar per month key, in the order given
    pub fn from_totals(months: &[GroupTotal]) -> Self {
        Self {
            bars: months.iter().map(|m| (m.key.clone(), m.total)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn render(&self, currency: &str) -> Document {
        let max = self
            .bars
            .iter()
            .map(|(_, amount)| amount.cents())
            .max()
            .unwrap_or(0)
            .max(1);

        let plot_height = HEIGHT - LABEL_BAND - TITLE_BAND;
        let baseline = HEIGHT - LABEL_BAND;
        let slot = WIDTH / self.bars.len().max(1) as f64;
        let bar_width = slot * 0.7;

        let scale_y = |cents: i64| cents as f64 / max as f64 * plot_height;

        let title = Text::new()
            .set("x", WIDTH / 2.0)
            .set("y", TITLE_BAND / 2.0)
            .set("text-anchor", "middle")
            .set("font-size", "24")
            .add(TextNode::new("Monthly Spending"));

        let mut document = Document::new().add(title);

        for (i, (month, amount)) in self.bars.iter().enumerate() {
            let height = scale_y(amount.cents());
            let x = slot * i as f64 + (slot - bar_width) / 2.0;
            let center = x + bar_width / 2.0;

            let bar = Rectangle::new()
                .set("x", x)
                .set("y", baseline - height)
                .set("width", bar_width)
                .set("height", height)
                .set("fill", color(0));

            let value = Text::new()
                .set("x", center)
                .set("y", baseline - height - 6.0)
                .set("text-anchor", "middle")
                .set("font-size", "14")
                .add(TextNode::new(escape_xml(&amount.format_with_symbol(currency))));

            let label = Text::new()
                .set("x", center)
                .set("y", baseline + LABEL_BAND / 2.0)
                .set("text-anchor", "middle")
                .set("font-size", "14")
                .add(TextNode::new(escape_xml(month)));

            document = document.add(bar).add(value).add(label);
        }

        let xaxis = Line::new()
            .set("x1", 0.0)
            .set("x2", WIDTH)
            .set("y1", baseline)
            .set("y2", baseline)
            .set("stroke", "black")
            .set("stroke-width", 2.0);

        document.add(xaxis).set(
            "viewBox",
            (-MARGIN, -MARGIN, WIDTH + 2.0 * MARGIN, HEIGHT + 2.0 * MARGIN),
        )
    }
}
