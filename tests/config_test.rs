// tests/config_test.rs
use branch_guard::config::{load_config, parse_config, Config};
use branch_guard::domain::Level;
use branch_guard::suggest::SuggestStrategy;
use branch_guard::PolicyRunner;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.protected_branch, "main");
    assert_eq!(config.exempt_keywords, vec!["release", "revert"]);
    assert_eq!(config.merge_direction_severity, Level::Warning);
    assert_eq!(config.suggestion.strategy, SuggestStrategy::EditDistance);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
protected_branch = "trunk"
exempt_keywords = ["revert"]

[suggestion]
strategy = "layered"
max_absolute_distance = 5
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.protected_branch, "trunk");
    assert_eq!(config.exempt_keywords, vec!["revert"]);
    assert_eq!(config.suggestion.strategy, SuggestStrategy::Layered);
    assert_eq!(config.suggestion.max_absolute_distance, 5);
    assert_eq!(config.naming_rules, Config::default().naming_rules);
}

#[test]
fn test_defaults_fixture_matches_builtin() {
    let config = load_config(Some("tests/fixtures/defaults.toml")).expect("Failed to load fixture");
    assert_eq!(config, Config::default());
}

#[test]
fn test_custom_tables_replace_builtin() {
    let config = load_config(Some("tests/fixtures/strict.toml")).expect("Failed to load fixture");
    assert_eq!(config.naming_rules.len(), 2);
    assert_eq!(config.naming_rules[1].shape, None);

    let runner = PolicyRunner::from_config(&config).unwrap();
    assert!(!runner.run("svc-billing/7", "develop").is_blocking());
    assert!(runner.run("main", "develop").is_blocking());

    // merge into the protected branch is blocking in this configuration
    let report = runner.run("svc-billing/7", "production");
    assert_eq!(report.findings[0].level, Level::Failure);

    // docs branches are excluded from the direction check
    assert_eq!(runner.run("docs/setup", "production").findings.len(), 1);
}

#[test]
fn test_custom_prefix_candidates_feed_suggestions() {
    let config = load_config(Some("tests/fixtures/strict.toml")).unwrap();
    let runner = PolicyRunner::from_config(&config).unwrap();
    assert_eq!(runner.run("sv", "develop").suggestion(), Some("svc-billing/42"));
    assert_eq!(runner.run("sv/12", "develop").suggestion(), Some("svc-/12"));
}

#[test]
fn test_custom_tables_never_suggest_builtin_names() {
    let config = load_config(Some("tests/fixtures/strict.toml")).unwrap();
    let runner = PolicyRunner::from_config(&config).unwrap();
    assert!(runner.rules().corpus().hints.is_empty());

    for head in ["hotfix", "my-feat/KP2-1", "relx"] {
        let report = runner.run(head, "develop");
        assert!(report.is_blocking(), "{head}");
        assert_eq!(report.suggestion(), None, "{head}");
    }
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
fn test_example_must_match_pattern() {
    let err = parse_config(
        r#"
[[naming_rules]]
id = "ticket"
pattern = 'T-\d+'
example = "T-x"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("example 'T-x'"));
}
