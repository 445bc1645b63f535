use serde::Serialize;

/// The two branch names of a proposed merge.
///
/// Names are kept verbatim: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchPair {
    pub head: String,
    pub base: String,
}

impl BranchPair {
    /// Create a new head/base pair
    pub fn new(head: impl Into<String>, base: impl Into<String>) -> Self {
        BranchPair {
            head: head.into(),
            base: base.into(),
        }
    }

    /// Check whether the merge targets the given protected branch (exact match)
    pub fn targets(&self, protected: &str) -> bool {
        self.base == protected
    }
}

/// First `/`-delimited segment of a branch name; the whole name when it has no `/`.
pub fn first_segment(name: &str) -> &str {
    name.split('/').next().unwrap_or(name)
}
