use crate::error::{BranchGuardError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| match e.code() {
            ErrorCode::UnbornBranch => BranchGuardError::branch("HEAD points to an unborn branch"),
            _ => BranchGuardError::Git(e),
        })?;

        if !head.is_branch() {
            return Err(BranchGuardError::branch(
                "HEAD is detached; pass --head explicitly",
            ));
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| BranchGuardError::branch("HEAD branch name is not valid UTF-8"))
    }

    fn default_branch(&self, remote: &str) -> Result<Option<String>> {
        let ref_name = format!("refs/remotes/{}/HEAD", remote);
        let reference = match self.repo.find_reference(&ref_name) {
            Ok(reference) => reference,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let prefix = format!("refs/remotes/{}/", remote);
        Ok(reference
            .symbolic_target()
            .and_then(|target| target.strip_prefix(&prefix))
            .map(str::to_string))
    }
}
