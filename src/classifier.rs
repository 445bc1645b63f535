use crate::domain::{NamingRule, RuleSet};

/// Returns true iff `name` matches at least one naming rule in full.
///
/// Total over all strings; the empty string is simply invalid.
pub fn classify(name: &str, rules: &RuleSet) -> bool {
    matching_rule(name, rules).is_some()
}

/// The first naming rule `name` satisfies, if any.
pub fn matching_rule<'a>(name: &str, rules: &'a RuleSet) -> Option<&'a NamingRule> {
    let rule = rules.find_naming(name);
    match rule {
        Some(rule) => tracing::debug!(branch = name, rule = %rule.id, "branch name matched"),
        None => tracing::debug!(branch = name, "branch name matched no rule"),
    }
    rule
}
