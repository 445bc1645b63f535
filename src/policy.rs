//! Policy runner
//!
//! Composes the keyword exemption, the merge-direction check, the naming
//! classifier and the suggestion engine into one [`Report`]. The two branch
//! checks are independent: neither short-circuits the other.

use crate::classifier;
use crate::config::Config;
use crate::direction;
use crate::domain::{Level, PolicyOutcome, Report, RuleSet};
use crate::error::Result;
use crate::suggest::Suggester;

/// Evaluates `(head, base)` pairs against one fixed configuration.
pub struct PolicyRunner {
    rules: RuleSet,
    protected_branch: String,
    exempt_keywords: Vec<String>,
    merge_direction_level: Level,
    suggester: Box<dyn Suggester>,
}

impl PolicyRunner {
    /// Compile the configured tables and build the configured suggester.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(PolicyRunner {
            rules: config.rule_set()?,
            protected_branch: config.protected_branch.clone(),
            exempt_keywords: config.exempt_keywords.clone(),
            merge_direction_level: config.merge_direction_severity,
            suggester: config.suggestion.build(),
        })
    }

    /// Replace the suggestion strategy.
    pub fn with_suggester(mut self, suggester: Box<dyn Suggester>) -> Self {
        self.suggester = suggester;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn protected_branch(&self) -> &str {
        &self.protected_branch
    }

    /// Run every check for one proposed merge.
    pub fn run(&self, head: &str, base: &str) -> Report {
        let mut report = Report::new(head, base);

        if let Some(keyword) = direction::exempt_keyword(head, &self.exempt_keywords) {
            tracing::info!(head, keyword, "head branch exempt from all checks");
            report.push(
                Level::Info,
                PolicyOutcome::Exempt {
                    branch: head.to_string(),
                    keyword: keyword.to_string(),
                },
            );
            return report;
        }

        if direction::check_direction(head, base, &self.protected_branch, &self.rules) {
            tracing::info!(head, base, "merge into protected branch");
            report.push(
                self.merge_direction_level,
                PolicyOutcome::WarnMergeDirection {
                    message: self.direction_message(),
                },
            );
        }

        match classifier::matching_rule(head, &self.rules) {
            Some(rule) => report.push(
                Level::Info,
                PolicyOutcome::Valid {
                    branch: head.to_string(),
                    rule: rule.id.clone(),
                },
            ),
            None => {
                let suggestion = self.suggester.suggest(head, self.rules.corpus());
                tracing::info!(head, suggestion = ?suggestion, "branch name rejected");
                report.push(
                    Level::Failure,
                    PolicyOutcome::InvalidName {
                        message: self.naming_message(head),
                        suggestion,
                    },
                );
            }
        }

        report
    }

    fn direction_message(&self) -> String {
        format!(
            "This pull request merges into the protected branch `{}`. \
             Check that the target branch is correct.",
            self.protected_branch
        )
    }

    fn naming_message(&self, head: &str) -> String {
        let mut message = format!(
            "Branch name `{}` does not follow the naming convention.\nUse one of:",
            head
        );
        for rule in self.rules.naming_rules() {
            let shape = rule.display_shape();
            if shape == rule.example {
                message.push_str(&format!("\n- `{}`", shape));
            } else {
                message.push_str(&format!("\n- `{}` (e.g. `{}`)", shape, rule.example));
            }
        }
        message
    }
}
