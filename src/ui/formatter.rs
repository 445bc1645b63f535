//! Pure formatting functions for UI output.
//!
//! Everything here returns strings; printing happens in the parent module.

use console::style;

use crate::domain::{Finding, PolicyOutcome, RuleSet};

/// Format one finding as terminal lines.
pub fn format_terminal(finding: &Finding) -> String {
    let (lead, details) = split_lead(&finding.message);
    let mut text = match &finding.outcome {
        PolicyOutcome::Valid { .. } | PolicyOutcome::Exempt { .. } => {
            format!("{} {}", style("✓").green(), lead)
        }
        PolicyOutcome::WarnMergeDirection { .. } => format!(
            "{} {}",
            style(format!("⚠ {}:", finding.level.to_string().to_uppercase())).yellow(),
            lead
        ),
        PolicyOutcome::InvalidName { .. } => format!(
            "{} {}",
            style(format!("✗ {}:", finding.level.to_string().to_uppercase())).red(),
            lead
        ),
    };

    if let Some(suggestion) = &finding.suggestion {
        text.push_str(&format!(
            "\n  Did you mean: {}",
            style(suggestion).cyan().bold()
        ));
    }
    if let Some(details) = details {
        text.push_str(&format!("\n{}", details));
    }
    text
}

/// Format one finding as a markdown section for a pull request comment.
pub fn format_markdown(finding: &Finding) -> String {
    let heading = match &finding.outcome {
        PolicyOutcome::Valid { .. } => "### ✅ Branch naming check",
        PolicyOutcome::Exempt { .. } => "### ⏭️ Branch checks skipped",
        PolicyOutcome::WarnMergeDirection { .. } => "### ⚠️ Check the merge direction",
        PolicyOutcome::InvalidName { .. } => {
            "### 🚫 Branch name does not follow the naming convention"
        }
    };

    let (lead, details) = split_lead(&finding.message);
    let mut section = format!("{}\n{}", heading, lead);
    if let Some(suggestion) = &finding.suggestion {
        section.push_str(&format!("\n\n**Did you mean:** `{}`", suggestion));
    }
    if let Some(details) = details {
        section.push_str(&format!("\n\n{}", details));
    }
    section
}

/// First line of a message, and the rest if there is any.
fn split_lead(message: &str) -> (&str, Option<&str>) {
    match message.split_once('\n') {
        Some((lead, rest)) => (lead, Some(rest)),
        None => (message, None),
    }
}

/// Format the naming and exclusion tables for `--list`.
pub fn format_rules(rules: &RuleSet, protected_branch: &str) -> String {
    let mut out = format!("{}\n", style("Naming rules:").bold());
    for rule in rules.naming_rules() {
        out.push_str(&format!(
            "  {:<16} {}  (e.g. {})\n",
            rule.id,
            rule.display_shape(),
            rule.example
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        style(format!("May target '{}' without a warning:", protected_branch)).bold()
    ));
    for rule in rules.exclusion_rules() {
        out.push_str(&format!("  {:<16} {}\n", rule.id, rule.pattern));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;

    fn invalid(suggestion: Option<&str>) -> Finding {
        Finding::new(
            Level::Failure,
            PolicyOutcome::InvalidName {
                message: "Branch name `oops` is invalid".to_string(),
                suggestion: suggestion.map(str::to_string),
            },
        )
    }

    #[test]
    fn test_markdown_failure_with_suggestion() {
        let md = format_markdown(&invalid(Some("main")));
        assert!(md.starts_with("### 🚫"));
        assert!(md.contains("Branch name `oops` is invalid"));
        assert!(md.ends_with("**Did you mean:** `main`"));
    }

    #[test]
    fn test_markdown_suggestion_precedes_shape_list() {
        let finding = Finding::new(
            Level::Failure,
            PolicyOutcome::InvalidName {
                message: "Branch name `mian` is invalid.\nUse one of:\n- `main`".to_string(),
                suggestion: Some("main".to_string()),
            },
        );
        let md = format_markdown(&finding);
        let suggestion_at = md.find("**Did you mean:**").unwrap();
        assert!(md.find("Branch name `mian`").unwrap() < suggestion_at);
        assert!(suggestion_at < md.find("Use one of:").unwrap());
        assert!(md.ends_with("- `main`"));

        let text = format_terminal(&finding);
        assert!(text.find("Did you mean:").unwrap() < text.find("Use one of:").unwrap());
    }

    #[test]
    fn test_markdown_exempt_heading() {
        let finding = Finding::new(
            Level::Info,
            PolicyOutcome::Exempt {
                branch: "revert-12".to_string(),
                keyword: "revert".to_string(),
            },
        );
        let md = format_markdown(&finding);
        assert!(md.starts_with("### ⏭️ Branch checks skipped\n"));
        assert!(!md.contains("Branch naming check"));
    }

    #[test]
    fn test_markdown_failure_without_suggestion() {
        let md = format_markdown(&invalid(None));
        assert!(!md.contains("Did you mean"));
    }

    #[test]
    fn test_markdown_warning_heading() {
        let finding = Finding::new(
            Level::Warning,
            PolicyOutcome::WarnMergeDirection {
                message: "targets main".to_string(),
            },
        );
        assert_eq!(
            format_markdown(&finding),
            "### ⚠️ Check the merge direction\ntargets main"
        );
    }

    #[test]
    fn test_terminal_failure_mentions_suggestion() {
        let text = format_terminal(&invalid(Some("main")));
        assert!(text.contains("FAILURE:"));
        assert!(text.contains("Did you mean:"));
        assert!(text.contains("main"));
    }

    #[test]
    fn test_format_rules_lists_every_rule() {
        let rules = RuleSet::builtin().unwrap();
        let text = format_rules(&rules, "main");
        assert!(text.contains("feature/KP2-[A/B]/sprint[number]"));
        assert!(text.contains("hotfix-api/.+"));
        assert!(text.contains("'main'"));
    }
}
