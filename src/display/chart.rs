//! Category bar chart
//!
//! Horizontal bars, one per label, scaled to the largest total. Income is
//! always drawn in the same magenta; other labels get evenly spaced hues.

use crossterm::style::Color;

use crate::config::Settings;
use crate::models::INCOME_LABEL;
use crate::services::Summary;

use super::{fit, Painter};

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 16;

/// Color for the label at `index` of `count` labels
pub fn chart_color(index: usize, label: &str, count: usize) -> Color {
    if label == INCOME_LABEL {
        return Color::Rgb {
            r: 170,
            g: 51,
            b: 106,
        };
    }
    let hue = if count == 0 {
        0.0
    } else {
        (index as f64 * 360.0 / count as f64) % 360.0
    };
    let (r, g, b) = hsl_to_rgb(hue, 0.70, 0.50);
    Color::Rgb { r, g, b }
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..=1) to RGB
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r1), channel(g1), channel(b1))
}

/// Render the per-label totals as a bar chart
pub fn format_category_chart(summary: &Summary, settings: &Settings, painter: &Painter) -> String {
    if summary.is_empty() {
        return "Nothing to chart yet.\n".to_string();
    }

    let max = summary
        .categories
        .iter()
        .map(|c| c.total.cents())
        .max()
        .unwrap_or(0);
    let count = summary.categories.len();

    let mut output = String::new();
    output.push_str(&painter.heading("Income and Expenses by Category"));
    output.push('\n');

    for (i, category) in summary.categories.iter().enumerate() {
        let len = if max <= 0 {
            0
        } else {
            // Every non-zero total gets at least one block
            ((category.total.cents() as f64 / max as f64) * BAR_WIDTH as f64)
                .round()
                .max(1.0) as usize
        };
        let bar = "█".repeat(len);
        let label = if category.label.is_empty() {
            "(uncategorized)"
        } else {
            &category.label
        };

        output.push_str(&format!(
            "{} {}{} {} ({:.1}%)\n",
            fit(label, LABEL_WIDTH),
            painter.paint(&bar, chart_color(i, &category.label, count)),
            " ".repeat(BAR_WIDTH - len),
            category.total.format_with_symbol(&settings.currency_symbol),
            summary.percentage(category)
        ));
    }

    output
}
