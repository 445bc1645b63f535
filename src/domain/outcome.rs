use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warning,
    Failure,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Result of one independent check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Head branch matched the naming rule `rule`.
    Valid { branch: String, rule: String },
    /// Head branch contains an exempt keyword; no other check ran.
    Exempt { branch: String, keyword: String },
    /// Merge targets the protected branch from a non-excluded head.
    WarnMergeDirection { message: String },
    /// Head branch matched no naming rule.
    InvalidName {
        message: String,
        suggestion: Option<String>,
    },
}

impl PolicyOutcome {
    pub fn message(&self) -> String {
        match self {
            PolicyOutcome::Valid { branch, .. } => {
                format!("Branch name `{}` follows the naming convention.", branch)
            }
            PolicyOutcome::Exempt { branch, keyword } => format!(
                "Branch `{}` contains the exempt keyword `{}`; branch checks skipped.",
                branch, keyword
            ),
            PolicyOutcome::WarnMergeDirection { message } => message.clone(),
            PolicyOutcome::InvalidName { message, .. } => message.clone(),
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            PolicyOutcome::InvalidName { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

/// An outcome together with the level the runner assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip)]
    pub outcome: PolicyOutcome,
}

impl Finding {
    pub fn new(level: Level, outcome: PolicyOutcome) -> Self {
        Finding {
            level,
            message: outcome.message(),
            suggestion: outcome.suggestion().map(str::to_string),
            outcome,
        }
    }
}

/// Everything one policy run produced, in the order the checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub head: String,
    pub base: String,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(head: impl Into<String>, base: impl Into<String>) -> Self {
        Report {
            head: head.into(),
            base: base.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, level: Level, outcome: PolicyOutcome) {
        self.findings.push(Finding::new(level, outcome));
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &PolicyOutcome> {
        self.findings.iter().map(|f| &f.outcome)
    }

    /// Most severe level in the report, `None` when empty.
    pub fn highest_level(&self) -> Option<Level> {
        self.findings.iter().map(|f| f.level).max()
    }

    /// True when the pull request gate should fail.
    pub fn is_blocking(&self) -> bool {
        self.highest_level() == Some(Level::Failure)
    }

    /// The first suggestion carried by any finding.
    pub fn suggestion(&self) -> Option<&str> {
        self.findings.iter().find_map(|f| f.suggestion.as_deref())
    }
}
