use crate::error::{BranchGuardError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without an actual checkout
#[derive(Debug, Default)]
pub struct MockRepository {
    current: Option<String>,
    remote_heads: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new mock repository with a detached HEAD and no remotes
    pub fn new() -> Self {
        Self::default()
    }

    /// Point HEAD at a branch
    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current = Some(branch.into());
    }

    /// Set the default branch of a remote
    pub fn set_default_branch(&mut self, remote: impl Into<String>, branch: impl Into<String>) {
        self.remote_heads.insert(remote.into(), branch.into());
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.current
            .clone()
            .ok_or_else(|| BranchGuardError::branch("HEAD is detached; pass --head explicitly"))
    }

    fn default_branch(&self, remote: &str) -> Result<Option<String>> {
        Ok(self.remote_heads.get(remote).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_current_branch() {
        let mut repo = MockRepository::new();
        assert!(repo.current_branch().is_err());

        repo.set_current_branch("front-A/KP2-1");
        assert_eq!(repo.current_branch().unwrap(), "front-A/KP2-1");
    }

    #[test]
    fn test_mock_repository_default_branch() {
        let mut repo = MockRepository::new();
        repo.set_default_branch("origin", "main");

        assert_eq!(repo.default_branch("origin").unwrap(), Some("main".to_string()));
        assert_eq!(repo.default_branch("upstream").unwrap(), None);
    }
}
