//! Local checkout access
//!
//! branch-guard normally receives head and base branch names from the CI
//! host. When it runs outside a pull request (a pre-push hook, a developer
//! shell) the missing names are read from the local repository through the
//! [Repository] trait:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the branch state of a repository.
pub trait Repository {
    /// Name of the branch HEAD points to.
    ///
    /// # Returns
    /// * `Ok(String)` - Short branch name, e.g. `feature/KP2-A/sprint1`
    /// * `Err` - If HEAD is detached or unborn, or on a Git error
    fn current_branch(&self) -> Result<String>;

    /// Default branch of a remote, read from `refs/remotes/<remote>/HEAD`.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Short branch name, e.g. `main`
    /// * `Ok(None)` - If the remote HEAD reference is not present locally
    /// * `Err` - On a Git error
    fn default_branch(&self, remote: &str) -> Result<Option<String>>;
}
