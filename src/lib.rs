//! Branch-naming and merge-direction policy for pull request gates.
//!
//! Given the head and base branch names of a proposed merge, branch-guard
//! decides whether the head name follows the naming taxonomy, whether the
//! merge direction deserves a warning, and which valid name is closest when
//! it does not.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod direction;
pub mod domain;
pub mod error;
pub mod git;
pub mod policy;
pub mod rules;
pub mod sink;
pub mod suggest;
pub mod ui;

pub use error::{BranchGuardError, Result};
pub use policy::PolicyRunner;
