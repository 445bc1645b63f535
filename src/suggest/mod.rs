//! Suggestion engine
//!
//! Proposes the closest valid branch name for a name the classifier rejected.
//! Two interchangeable strategies sit behind the [`Suggester`] trait:
//!
//! - [`EditDistanceSuggester`]: closest canonical example by edit distance,
//!   falling back to segment-prefix repair. This is the default.
//! - [`LayeredSuggester`]: prefix, segment-prefix repair, fuzzy containment
//!   and keyword heuristics, first non-empty layer wins.
//!
//! Both are deterministic and total: any input yields `Some` or `None`.

pub mod distance;
pub mod layered;

pub use distance::EditDistanceSuggester;
pub use layered::LayeredSuggester;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::CandidateCorpus;

/// A strategy producing at most one correction for an invalid branch name.
pub trait Suggester: Send + Sync {
    /// Best correction for `name`, or `None` when nothing is close enough.
    fn suggest(&self, name: &str, corpus: &CandidateCorpus) -> Option<String>;
}

/// Configuration selector for the suggestion strategy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestStrategy {
    #[default]
    EditDistance,
    Layered,
}

impl SuggestStrategy {
    /// Build the suggester for this strategy.
    pub fn build(self, max_relative: f64, max_absolute: usize) -> Box<dyn Suggester> {
        match self {
            SuggestStrategy::EditDistance => {
                Box::new(EditDistanceSuggester::new(max_relative, max_absolute))
            }
            SuggestStrategy::Layered => Box::new(LayeredSuggester),
        }
    }
}

impl fmt::Display for SuggestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestStrategy::EditDistance => f.write_str("edit-distance"),
            SuggestStrategy::Layered => f.write_str("layered"),
        }
    }
}
