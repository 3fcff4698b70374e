use std::fmt::Write;

use crate::error::Result;
use crate::keywords::ranked_keywords;
use crate::overview::Report;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    top_keywords: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            top_keywords: 10,
        }
    }

    #[must_use]
    pub const fn with_top_keywords(mut self, count: usize) -> Self {
        self.top_keywords = count;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_overview(&self, output: &mut String, report: &Report) {
        writeln!(output, "Document Review Report: {}", report.file_name).ok();
        writeln!(output, "  Words: {}", report.overview.word_count).ok();
        writeln!(output, "  Pages: {}", report.overview.page_count).ok();

        let ranked = ranked_keywords(&report.overview.key_words);
        let top = &ranked[..ranked.len().min(self.top_keywords)];
        writeln!(output, "  Key words: {}", join_keywords(top)).ok();
        if self.verbose >= 1 && ranked.len() > self.top_keywords {
            writeln!(
                output,
                "  More key words: {}",
                join_keywords(&ranked[self.top_keywords..])
            )
            .ok();
        }

        let errors = report.overview.total_errors;
        let color = if errors == 0 { ansi::GREEN } else { ansi::RED };
        let count = self.colorize(&errors.to_string(), color);
        writeln!(output, "  Total errors: {count}").ok();
    }

    fn write_error_types(&self, output: &mut String, report: &Report) {
        if report.error_types.is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "Error types:").ok();
        for (message, count) in &report.error_types {
            writeln!(output, "  {message}: {count}").ok();
        }
    }

    fn write_findings(&self, output: &mut String, report: &Report) {
        if report.findings.is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "Findings:").ok();
        for finding in &report.findings {
            let icon = self.colorize("✗", ansi::RED);
            writeln!(output, "{icon} {}", finding.message).ok();
            let context = self.colorize(&finding.context, ansi::CYAN);
            writeln!(output, "   Context: {context}").ok();
        }
    }

    fn summary(&self, report: &Report) -> String {
        let errors = report.overview.total_errors;
        if errors == 0 {
            format!("Summary: {} found", self.colorize("no errors", ansi::GREEN))
        } else {
            let count = self.colorize(&errors.to_string(), ansi::RED);
            format!(
                "Summary: {count} errors across {} error types",
                report.error_types.len()
            )
        }
    }
}

fn join_keywords(entries: &[(&str, usize)]) -> String {
    entries
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        self.write_overview(&mut output, report);
        self.write_error_types(&mut output, report);
        self.write_findings(&mut output, report);

        writeln!(output).ok();
        writeln!(output, "{}", self.summary(report)).ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
