//! Merge-direction check and keyword exemptions.
//!
//! The merge-direction check is advisory: it only decides whether a warning
//! is due, the runner decides how loudly to report it.

use crate::domain::{BranchPair, RuleSet};

/// Returns true when a merge-direction warning should fire.
///
/// Fires iff `base` is exactly `protected` and `head` fully matches no
/// exclusion rule.
pub fn check_direction(head: &str, base: &str, protected: &str, rules: &RuleSet) -> bool {
    let pair = BranchPair::new(head, base);
    if !pair.targets(protected) {
        return false;
    }

    match rules.find_exclusion(head) {
        Some(rule) => {
            tracing::debug!(head, rule = %rule.id, "head excluded from merge-direction warning");
            false
        }
        None => true,
    }
}

/// Returns the first keyword contained anywhere in `head`.
///
/// Plain, case-sensitive substring search. Empty keywords are ignored so a
/// stray `""` in configuration cannot exempt every branch.
pub fn exempt_keyword<'a>(head: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .find(|k| head.contains(k.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::builtin().unwrap()
    }

    #[test]
    fn test_warns_for_non_excluded_head_into_main() {
        assert!(check_direction("front-A/KP2-9", "main", "main", &rules()));
        assert!(check_direction("preRelease", "main", "main", &rules()));
        assert!(check_direction("", "main", "main", &rules()));
    }

    #[test]
    fn test_excluded_heads_do_not_warn() {
        let rules = rules();
        let excluded = [
            "front-Z/KP2-9",
            "back-Z/anything",
            "api-Z/x",
            "feature/KP2-A/sprint1",
            "feature/KP2-B/whatever",
            "feature/KP2-Z/new-feature",
            "hotfix-front/KP2-1",
            "hotfix-back/urgent",
            "hotfix-api/x",
        ];
        for head in excluded {
            assert!(!check_direction(head, "main", "main", &rules), "{}", head);
        }
    }

    #[test]
    fn test_exclusions_are_anchored() {
        let rules = rules();
        assert!(check_direction("front-Z/", "main", "main", &rules));
        assert!(check_direction("xfront-Z/KP2-1", "main", "main", &rules));
        assert!(check_direction("feature/KP2-C/sprint1", "main", "main", &rules));
    }

    #[test]
    fn test_other_bases_never_warn() {
        let rules = rules();
        assert!(!check_direction("front-A/KP2-9", "develop", "main", &rules));
        assert!(!check_direction("front-A/KP2-9", "Main", "main", &rules));
        assert!(!check_direction("front-A/KP2-9", "", "main", &rules));
    }

    #[test]
    fn test_custom_protected_branch() {
        let rules = rules();
        assert!(check_direction("front-A/KP2-9", "production", "production", &rules));
        assert!(!check_direction("front-A/KP2-9", "main", "production", &rules));
    }

    #[test]
    fn test_exempt_keyword_substring() {
        let keywords = vec!["release".to_string(), "revert".to_string()];
        assert_eq!(
            exempt_keyword("hotfix-misc-release-123", &keywords),
            Some("release")
        );
        assert_eq!(exempt_keyword("revert-front-A", &keywords), Some("revert"));
        assert_eq!(exempt_keyword("release1.0.0", &keywords), Some("release"));
        assert_eq!(exempt_keyword("preRelease", &keywords), None);
        assert_eq!(exempt_keyword("front-A/KP2-9", &keywords), None);
    }

    #[test]
    fn test_exempt_keyword_ignores_empty_entries() {
        let keywords = vec![String::new()];
        assert_eq!(exempt_keyword("anything", &keywords), None);
        assert_eq!(exempt_keyword("anything", &[]), None);
    }
}
