//! Domain types - pure data independent of configuration files, git and output

pub mod branch;
pub mod outcome;
pub mod rule;

pub use branch::{first_segment, BranchPair};
pub use outcome::{Finding, Level, PolicyOutcome, Report};
pub use rule::{CandidateCorpus, ExclusionRule, KeywordHint, NamingRule, RuleSet};
