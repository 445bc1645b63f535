//! User interface module - report sinks and console output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Sinks that collect rendered findings, and printing helpers

pub mod formatter;

pub use formatter::{format_markdown, format_rules, format_terminal};

use console::style;

use crate::domain::{Finding, RuleSet};
use crate::sink::ReportSink;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print the configured rule tables.
pub fn display_rules(rules: &RuleSet, protected_branch: &str) {
    print!("{}", format_rules(rules, protected_branch));
}

/// Collects coloured terminal lines.
#[derive(Debug, Default)]
pub struct TerminalSink {
    lines: Vec<String>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        self.lines.join("\n")
    }
}

impl ReportSink for TerminalSink {
    fn info(&mut self, finding: &Finding) {
        self.lines.push(format_terminal(finding));
    }

    fn warn(&mut self, finding: &Finding) {
        self.lines.push(format_terminal(finding));
    }

    fn fail(&mut self, finding: &Finding) {
        self.lines.push(format_terminal(finding));
    }
}

/// Collects a pull request comment body.
///
/// Warnings and failures are also kept as one-line annotations so a host
/// can post them separately from the comment.
#[derive(Debug, Default)]
pub struct MarkdownSink {
    sections: Vec<String>,
    annotations: Vec<String>,
}

impl MarkdownSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line annotations for warnings and failures, in report order.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn into_output(self) -> String {
        self.sections.join("\n\n")
    }

    fn annotate(&mut self, finding: &Finding) {
        let first_line = finding.message.lines().next().unwrap_or_default();
        self.annotations.push(format!("{}: {}", finding.level, first_line));
    }
}

impl ReportSink for MarkdownSink {
    fn info(&mut self, finding: &Finding) {
        self.sections.push(format_markdown(finding));
    }

    fn warn(&mut self, finding: &Finding) {
        self.annotate(finding);
        self.sections.push(format_markdown(finding));
    }

    fn fail(&mut self, finding: &Finding) {
        self.annotate(finding);
        self.sections.push(format_markdown(finding));
    }
}
