mod html;
mod json;
mod stats;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use stats::{StatsFormatter, StatsJsonFormatter, StatsTextFormatter};
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::overview::Report;

/// Trait for rendering a finished review into an output format.
pub trait ReportFormatter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if rendering fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
