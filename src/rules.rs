//! Built-in branch naming taxonomy.
//!
//! Everything here is plain data. The tables are compiled into a
//! [`RuleSet`](crate::domain::RuleSet) once at startup; adding a shape means
//! adding an entry, never a new code path.

use crate::domain::{ExclusionRule, NamingRule};

/// Returns the default naming rules, in the order they are listed to users.
pub fn default_naming_rules() -> Vec<NamingRule> {
    vec![
        NamingRule::new("main", r"main", "main", "main"),
        NamingRule::new(
            "feature-sprint",
            r"feature/KP2-[AB]/sprint\d+",
            "feature/KP2-[A/B]/sprint[number]",
            "feature/KP2-A/sprint1",
        ),
        NamingRule::new(
            "feature-z",
            r"feature/KP2-Z/.*",
            "feature/KP2-Z/[any]",
            "feature/KP2-Z/new-feature",
        ),
        NamingRule::new(
            "front",
            r"front-[ABZ]/KP2-\d+.*",
            "front-[A/B/Z]/KP2-[number][any]",
            "front-A/KP2-123-fix",
        ),
        NamingRule::new(
            "back",
            r"back-[ABZ]/KP2-\d+.*",
            "back-[A/B/Z]/KP2-[number][any]",
            "back-B/KP2-456-update",
        ),
        NamingRule::new(
            "api",
            r"api-[ABZ]/KP2-\d+.*",
            "api-[A/B/Z]/KP2-[number][any]",
            "api-Z/KP2-789-implement",
        ),
        NamingRule::new(
            "hotfix-front",
            r"hotfix-front/KP2-\d+.*",
            "hotfix-front/KP2-[number][any]",
            "hotfix-front/KP2-123",
        ),
        NamingRule::new(
            "hotfix-back",
            r"hotfix-back/KP2-\d+.*",
            "hotfix-back/KP2-[number][any]",
            "hotfix-back/KP2-456",
        ),
        NamingRule::new(
            "hotfix-api",
            r"hotfix-api/KP2-\d+.*",
            "hotfix-api/KP2-[number][any]",
            "hotfix-api/KP2-789",
        ),
        NamingRule::new("pre-release", r"preRelease", "preRelease", "preRelease"),
        NamingRule::new(
            "release",
            r"release\d+\.\d+\.\d+",
            "release[major].[minor].[patch]",
            "release1.0.0",
        ),
    ]
}

/// Returns the head-branch shapes that may target the protected branch
/// without a merge-direction warning.
pub fn default_exclusion_rules() -> Vec<ExclusionRule> {
    vec![
        ExclusionRule::new("feature", r"feature/KP2-[ABZ]/.+"),
        ExclusionRule::new("front-z", r"front-Z/.+"),
        ExclusionRule::new("back-z", r"back-Z/.+"),
        ExclusionRule::new("api-z", r"api-Z/.+"),
        ExclusionRule::new("hotfix-front", r"hotfix-front/.+"),
        ExclusionRule::new("hotfix-back", r"hotfix-back/.+"),
        ExclusionRule::new("hotfix-api", r"hotfix-api/.+"),
    ]
}

/// Returns the valid leading forms used to repair a mistyped first segment.
pub fn default_prefix_candidates() -> Vec<String> {
    [
        "feature/KP2-A/sprint",
        "feature/KP2-B/sprint",
        "feature/KP2-Z/",
        "front-A/KP2-",
        "front-B/KP2-",
        "front-Z/KP2-",
        "back-A/KP2-",
        "back-B/KP2-",
        "back-Z/KP2-",
        "api-A/KP2-",
        "api-B/KP2-",
        "api-Z/KP2-",
        "hotfix-front/KP2-",
        "hotfix-back/KP2-",
        "hotfix-api/KP2-",
        "preRelease",
        "release",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Returns `(pattern, suggestion)` pairs tried as a last resort by the
/// layered suggester. Patterns are unanchored and matched case-insensitively.
///
/// The feature pattern also tolerates a dropped `a` (`feture/`, `fetaure/`).
pub fn default_keyword_hints() -> Vec<(String, String)> {
    vec![
        (
            r"fe?a?t(ure)?/KP2-".to_string(),
            "feature/KP2-A/sprint1".to_string(),
        ),
        (r"hot?fix".to_string(), "hotfix-front/KP2-123".to_string()),
        (r"rel(ease)?".to_string(), "release1.0.0".to_string()),
    ]
}

/// Returns the head-branch keywords that skip every check when present
/// anywhere in the name.
pub fn default_exempt_keywords() -> Vec<String> {
    vec!["release".to_string(), "revert".to_string()]
}

/// Returns the default protected branch.
pub fn default_protected_branch() -> String {
    "main".to_string()
}
