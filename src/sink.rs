//! Output sinks for policy reports.
//!
//! The policy core only builds a [`Report`]; whoever hosts it decides how
//! findings are shown (terminal, pull request comment, CI annotation) by
//! implementing [`ReportSink`].

use crate::domain::{Finding, Level, Report};

/// Host-controlled rendering surface with one entry point per level.
pub trait ReportSink {
    fn info(&mut self, finding: &Finding);
    fn warn(&mut self, finding: &Finding);
    fn fail(&mut self, finding: &Finding);
}

impl Report {
    /// Send every finding to `sink`, in report order.
    pub fn emit(&self, sink: &mut dyn ReportSink) {
        for finding in &self.findings {
            match finding.level {
                Level::Info => sink.info(finding),
                Level::Warning => sink.warn(finding),
                Level::Failure => sink.fail(finding),
            }
        }
    }
}

/// Sink that keeps `(level, message)` pairs in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub entries: Vec<(Level, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl ReportSink for RecordingSink {
    fn info(&mut self, finding: &Finding) {
        self.entries.push((Level::Info, finding.message.clone()));
    }

    fn warn(&mut self, finding: &Finding) {
        self.entries.push((Level::Warning, finding.message.clone()));
    }

    fn fail(&mut self, finding: &Finding) {
        self.entries.push((Level::Failure, finding.message.clone()));
    }
}
