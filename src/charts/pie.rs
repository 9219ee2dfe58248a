//! Category share pie chart
//!
//! Slices are drawn as closed paths from the center; the arc is
//! approximated with short line segments.

use std::f64::consts::PI;

use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use super::{color, escape_xml, HEIGHT, MARGIN, WIDTH};
use crate::models::Money;
use crate::storage::GroupTotal;

const RADIUS: f64 = 280.0;
const CENTER: (f64, f64) = (340.0, HEIGHT / 2.0);
/// Arc segments per full turn
const SEGMENTS: f64 = 180.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPieChart {
    slices: Vec<(String, f64)>,
}

impl CategoryPieChart {
    /// One slice per category, sized by its share of the summed totals
    pub fn from_totals(categories: &[GroupTotal]) -> Self {
        let total: Money = categories.iter().map(|c| c.total).sum();
        Self {
            slices: categories
                .iter()
                .map(|c| (c.key.clone(), c.total.percentage_of(total)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn render(&self) -> Document {
        let mut document = Document::new();
        let mut start = 0.0;

        for (i, (category, percentage)) in self.slices.iter().enumerate() {
            let sweep = percentage / 100.0 * 2.0 * PI;
            let path = Path::new()
                .set("fill", color(i))
                .set("stroke", "white")
                .set("stroke-width", 1.0)
                .set("d", slice(start, start + sweep));
            start += sweep;

            let legend_y = 60.0 + 30.0 * i as f64;
            let swatch = Rectangle::new()
                .set("x", 700.0)
                .set("y", legend_y - 14.0)
                .set("width", 18.0)
                .set("height", 18.0)
                .set("fill", color(i));
            let label = Text::new()
                .set("x", 726.0)
                .set("y", legend_y)
                .set("font-size", "16")
                .add(TextNode::new(format!(
                    "{} ({:.1}%)",
                    escape_xml(category),
                    percentage
                )));

            document = document.add(path).add(swatch).add(label);
        }

        let title = Text::new()
            .set("x", CENTER.0)
            .set("y", 30.0)
            .set("text-anchor", "middle")
            .set("font-size", "24")
            .add(TextNode::new("Spending by Category"));

        document.add(title).set(
            "viewBox",
            (-MARGIN, -MARGIN, WIDTH + 2.0 * MARGIN, HEIGHT + 2.0 * MARGIN),
        )
    }
}

/// Point on the circle at an angle measured clockwise from 12 o'clock
fn point(angle: f64) -> (f64, f64) {
    (
        CENTER.0 + RADIUS * angle.sin(),
        CENTER.1 - RADIUS * angle.cos(),
    )
}

fn slice(from: f64, to: f64) -> Data {
    let steps = ((to - from) / (2.0 * PI) * SEGMENTS).ceil().max(1.0) as usize;
    let mut data = Data::new().move_to(CENTER).line_to(point(from));
    for step in 1..=steps {
        data = data.line_to(point(from + (to - from) * step as f64 / steps as f64));
    }
    data.close()
}
