use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{ExclusionRule, Level, NamingRule, RuleSet};
use crate::error::{BranchGuardError, Result};
use crate::rules;
use crate::suggest::distance::{DEFAULT_MAX_ABSOLUTE_DISTANCE, DEFAULT_MAX_RELATIVE_DISTANCE};
use crate::suggest::{SuggestStrategy, Suggester};

const LOCAL_CONFIG_FILE: &str = "./branchguard.toml";
const USER_CONFIG_FILE: &str = ".branchguard.toml";

/// Represents the complete configuration for branch-guard.
///
/// Every key is optional; omitted keys keep the built-in taxonomy and
/// defaults, so an empty file behaves exactly like no file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "rules::default_protected_branch")]
    pub protected_branch: String,

    #[serde(default = "rules::default_exempt_keywords")]
    pub exempt_keywords: Vec<String>,

    #[serde(default = "default_merge_direction_severity")]
    pub merge_direction_severity: Level,

    #[serde(default)]
    pub suggestion: SuggestionConfig,

    #[serde(default = "rules::default_naming_rules")]
    pub naming_rules: Vec<NamingRule>,

    #[serde(default = "rules::default_exclusion_rules")]
    pub exclusion_rules: Vec<ExclusionRule>,

    #[serde(default = "rules::default_prefix_candidates")]
    pub prefix_candidates: Vec<String>,
}

/// Merge-direction findings are advisory unless configured otherwise.
fn default_merge_direction_severity() -> Level {
    Level::Warning
}

fn default_max_relative_distance() -> f64 {
    DEFAULT_MAX_RELATIVE_DISTANCE
}

fn default_max_absolute_distance() -> usize {
    DEFAULT_MAX_ABSOLUTE_DISTANCE
}

/// Configuration for the suggestion engine.
///
/// The distance thresholds only apply to the `edit-distance` strategy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SuggestionConfig {
    #[serde(default)]
    pub strategy: SuggestStrategy,

    #[serde(default = "default_max_relative_distance")]
    pub max_relative_distance: f64,

    #[serde(default = "default_max_absolute_distance")]
    pub max_absolute_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            strategy: SuggestStrategy::default(),
            max_relative_distance: default_max_relative_distance(),
            max_absolute_distance: default_max_absolute_distance(),
        }
    }
}

impl SuggestionConfig {
    /// Build the configured suggester.
    pub fn build(&self) -> Box<dyn Suggester> {
        self.strategy
            .build(self.max_relative_distance, self.max_absolute_distance)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            protected_branch: rules::default_protected_branch(),
            exempt_keywords: rules::default_exempt_keywords(),
            merge_direction_severity: default_merge_direction_severity(),
            suggestion: SuggestionConfig::default(),
            naming_rules: rules::default_naming_rules(),
            exclusion_rules: rules::default_exclusion_rules(),
            prefix_candidates: rules::default_prefix_candidates(),
        }
    }
}

impl Config {
    /// Compile the naming and exclusion tables.
    pub fn rule_set(&self) -> Result<RuleSet> {
        RuleSet::new(
            self.naming_rules.clone(),
            self.exclusion_rules.clone(),
            self.prefix_candidates.clone(),
        )
    }

    /// Check everything that `rule_set` does not cover.
    pub fn validate(&self) -> Result<()> {
        if self.protected_branch.is_empty() {
            return Err(BranchGuardError::config("protected_branch must not be empty"));
        }
        let relative = self.suggestion.max_relative_distance;
        if !relative.is_finite() || relative < 0.0 {
            return Err(BranchGuardError::config(format!(
                "suggestion.max_relative_distance must be a non-negative number, got {}",
                relative
            )));
        }
        self.rule_set().map(|_| ())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchguard.toml` in current directory
/// 3. `.branchguard.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated, or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    tracing::debug!(
        protected = %config.protected_branch,
        naming_rules = config.naming_rules.len(),
        exclusion_rules = config.exclusion_rules.len(),
        strategy = %config.suggestion.strategy,
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_equals_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
protected_branch = "production"
merge_direction_severity = "failure"

[suggestion]
strategy = "layered"
"#,
        )
        .unwrap();
        assert_eq!(config.protected_branch, "production");
        assert_eq!(config.merge_direction_severity, Level::Failure);
        assert_eq!(config.suggestion.strategy, SuggestStrategy::Layered);
        assert_eq!(config.suggestion.max_absolute_distance, 20);
        assert_eq!(config.naming_rules.len(), 11);
        assert_eq!(config.exempt_keywords, vec!["release", "revert"]);
    }

    #[test]
    fn test_rejects_empty_protected_branch() {
        let err = parse_config("protected_branch = \"\"").unwrap_err();
        assert!(err.to_string().contains("protected_branch"));
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = parse_config("[suggestion]\nmax_relative_distance = -1.0").unwrap_err();
        assert!(err.to_string().contains("max_relative_distance"));
    }

    #[test]
    fn test_rejects_unknown_severity() {
        let err = parse_config("merge_direction_severity = \"fatal\"").unwrap_err();
        assert!(matches!(err, BranchGuardError::Toml(_)));
    }

    #[test]
    fn test_rejects_bad_rule_pattern() {
        let err = parse_config(
            r#"
[[naming_rules]]
id = "broken"
pattern = "feature/("
example = "feature/"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, BranchGuardError::Pattern { .. }));
    }
}
