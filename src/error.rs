use thiserror::Error;

/// Unified error type for branch-guard operations.
///
/// The policy core never produces these; they come from the edges
/// (configuration files, the local git checkout, output serialization).
#[derive(Error, Debug)]
pub enum BranchGuardError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rule pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Branch resolution failed: {0}")]
    Branch(String),

    #[error("Failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in branch-guard
pub type Result<T> = std::result::Result<T, BranchGuardError>;

impl BranchGuardError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BranchGuardError::Config(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        BranchGuardError::Branch(msg.into())
    }

    /// Wrap a regex compilation failure together with the offending pattern
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        BranchGuardError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BranchGuardError::config("duplicate rule id 'main'");
        assert_eq!(
            err.to_string(),
            "Configuration error: duplicate rule id 'main'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BranchGuardError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_pattern_error_names_pattern() {
        let source = regex::Regex::new("feature/(").unwrap_err();
        let err = BranchGuardError::pattern("feature/(", source);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid rule pattern 'feature/('"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("protected_branch = ").unwrap_err();
        let err: BranchGuardError = toml_err.into();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BranchGuardError::config("x"), "Configuration error"),
            (BranchGuardError::branch("x"), "Branch resolution failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_long_messages() {
        let long_msg = "a".repeat(1000);
        let err = BranchGuardError::branch(&long_msg);
        assert!(err.to_string().contains(&long_msg));
    }
}
