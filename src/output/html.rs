use std::fmt::Write;

use crate::error::Result;
use crate::keywords::ranked_keywords;
use crate::overview::Report;

use super::ReportFormatter;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Document Review Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        h1, h2 { color: #333; }
        .overview { margin-bottom: 20px; padding: 10px; border: 1px solid #ccc; background-color: #f0f8ff; border-radius: 5px; }
        .tag { display: inline-block; margin: 5px; padding: 5px 10px; background-color: #e0f7fa; border-radius: 5px; border: 1px solid #81d4fa; }
        .sentence { margin: 10px 0; padding: 10px; background-color: #f9f9f9; border-radius: 5px; }
        .error { color: red; font-weight: bold; }
        .error-description { color: darkred; margin-left: 20px; }
        .show-more-link { color: #007bff; cursor: pointer; text-decoration: underline; }
        .show-more-link:hover { color: #0056b3; }
        li { margin-bottom: 5px; }
        .hidden { display: none; }
        footer { margin-top: 20px; font-size: 14px; color: #666; text-align: center; padding: 10px 0; }
    </style>
    <script>
        function toggleKeywords() {
            var hiddenKeywords = document.getElementById('hidden-keywords');
            var link = document.getElementById('show-more-link');
            if (hiddenKeywords.style.display === 'none' || hiddenKeywords.style.display === '') {
                hiddenKeywords.style.display = 'block';
                link.innerText = 'Show Less';
            } else {
                hiddenKeywords.style.display = 'none';
                link.innerText = 'Show More';
            }
        }
    </script>
</head>
<body>
    <h1>Document Review Report</h1>
"#;

const HTML_FOOTER: &str = r"    <footer>
        <p>Generated by doc-guard</p>
    </footer>
</body>
</html>
";

/// HTML formatter for generating standalone review reports.
pub struct HtmlFormatter {
    top_keywords: usize,
}

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { top_keywords: 10 }
    }

    #[must_use]
    pub const fn with_top_keywords(mut self, count: usize) -> Self {
        self.top_keywords = count;
        self
    }

    fn write_keyword_tags(output: &mut String, entries: &[(&str, usize)]) {
        for (word, count) in entries {
            writeln!(
                output,
                r#"            <span class="tag">{} ({count})</span>"#,
                html_escape(word)
            )
            .ok();
        }
    }

    fn write_overview(&self, output: &mut String, report: &Report) {
        let escaped_name = html_escape(&report.file_name);
        writeln!(
            output,
            "    <p><strong>File Name:</strong> {escaped_name}</p>"
        )
        .ok();

        output.push_str("    <div class=\"overview\">\n");
        output.push_str("        <h2>Overview</h2>\n");
        writeln!(
            output,
            "        <p><strong>Total Word Count:</strong> {}</p>",
            report.overview.word_count
        )
        .ok();
        writeln!(
            output,
            "        <p><strong>Page Count:</strong> {}</p>",
            report.overview.page_count
        )
        .ok();

        output.push_str("        <p><strong>Key Words:</strong></p>\n");
        let ranked = ranked_keywords(&report.overview.key_words);
        let split = ranked.len().min(self.top_keywords);
        output.push_str("        <div>\n");
        Self::write_keyword_tags(output, &ranked[..split]);
        output.push_str("        </div>\n");
        if ranked.len() > split {
            output.push_str("        <div id=\"hidden-keywords\" class=\"hidden\">\n");
            Self::write_keyword_tags(output, &ranked[split..]);
            output.push_str("        </div>\n");
            output.push_str(
                "        <span id=\"show-more-link\" class=\"show-more-link\" onclick=\"toggleKeywords()\">Show More</span>\n",
            );
        }

        writeln!(
            output,
            "        <p><strong>Total Errors:</strong> {}</p>",
            report.overview.total_errors
        )
        .ok();

        if !report.error_types.is_empty() {
            output.push_str("        <p><strong>Error Types:</strong></p>\n");
            output.push_str("        <ul>\n");
            for (message, count) in &report.error_types {
                writeln!(output, "            <li>{}: {count}</li>", html_escape(message)).ok();
            }
            output.push_str("        </ul>\n");
        }

        output.push_str("    </div>\n");
    }

    fn write_findings(output: &mut String, report: &Report) {
        if report.findings.is_empty() {
            output.push_str("    <p>No issues were detected in the document.</p>\n");
            return;
        }

        output.push_str("    <p>The following issues were detected in the document:</p>\n");
        for finding in &report.findings {
            output.push_str("    <div class=\"sentence\">\n");
            writeln!(
                output,
                "        <p><strong>Context:</strong> {}</p>",
                html_escape(&finding.context)
            )
            .ok();
            writeln!(
                output,
                "        <p class=\"error-description\"><span class=\"error\">Error:</span> {}</p>",
                html_escape(&finding.message)
            )
            .ok();
            output.push_str("    </div>\n");
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(HTML_HEADER);
        self.write_overview(&mut output, report);
        Self::write_findings(&mut output, report);
        output.push_str(HTML_FOOTER);

        Ok(output)
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
