//! Display formatting for terminal output
//!
//! Formatters return plain `String`s; color is applied through a
//! [`Painter`] so output stays readable when piped.

pub mod chart;
pub mod report;
pub mod transaction;

use crossterm::style::{Color, Stylize};

use crate::config::Theme;

pub use chart::{chart_color, format_category_chart};
pub use report::{
    format_budget_config, format_budget_status, format_overview, format_summary, status_color,
};
pub use transaction::{format_transaction_details, format_transaction_register};

/// Applies terminal colors, or nothing when disabled
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
    theme: Theme,
}

impl Painter {
    pub fn new(enabled: bool, theme: Theme) -> Self {
        Self { enabled, theme }
    }

    /// No escape codes at all
    pub fn plain() -> Self {
        Self::new(false, Theme::default())
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Section titles, tuned to the display mode
    pub fn heading(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let color = match self.theme {
            Theme::Light => Color::DarkBlue,
            Theme::Dark => Color::Cyan,
        };
        text.with(color).bold().to_string()
    }

    /// Secondary text such as ids and separators
    pub fn muted(&self, text: &str) -> String {
        let color = match self.theme {
            Theme::Light => Color::DarkGrey,
            Theme::Dark => Color::Grey,
        };
        self.paint(text, color)
    }
}

/// Pad or truncate `s` to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{}{}", s, " ".repeat(width - count))
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    }
}
