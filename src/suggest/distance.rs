use crate::domain::CandidateCorpus;

use super::{LayeredSuggester, Suggester};

pub const DEFAULT_MAX_RELATIVE_DISTANCE: f64 = 0.4;
pub const DEFAULT_MAX_ABSOLUTE_DISTANCE: usize = 20;

/// "Did you mean" suggester over the canonical examples.
///
/// Comparison is case-insensitive Levenshtein distance. A candidate is only
/// accepted when its distance is strictly below both `max_relative` times the
/// input length and `max_absolute`; ties go to the earlier example. When no
/// example is close enough and the input has a `/`, the segment-prefix repair
/// is tried instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditDistanceSuggester {
    pub max_relative: f64,
    pub max_absolute: usize,
}

impl Default for EditDistanceSuggester {
    fn default() -> Self {
        EditDistanceSuggester {
            max_relative: DEFAULT_MAX_RELATIVE_DISTANCE,
            max_absolute: DEFAULT_MAX_ABSOLUTE_DISTANCE,
        }
    }
}

impl EditDistanceSuggester {
    pub fn new(max_relative: f64, max_absolute: usize) -> Self {
        EditDistanceSuggester {
            max_relative,
            max_absolute,
        }
    }

    /// Closest example under the thresholds, with its distance.
    pub fn closest<'a>(&self, name: &str, examples: &'a [String]) -> Option<(&'a str, usize)> {
        let input = name.to_lowercase();
        let limit =
            (self.max_relative * input.chars().count() as f64).min(self.max_absolute as f64);

        let mut best: Option<(&'a str, usize)> = None;
        for example in examples {
            let distance = strsim::levenshtein(&input, &example.to_lowercase());
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((example.as_str(), distance));
            }
        }

        best.filter(|&(_, distance)| (distance as f64) < limit)
    }
}

impl Suggester for EditDistanceSuggester {
    fn suggest(&self, name: &str, corpus: &CandidateCorpus) -> Option<String> {
        if name.is_empty() {
            return None;
        }

        if let Some((example, distance)) = self.closest(name, &corpus.examples) {
            if example != name {
                tracing::debug!(branch = name, %example, distance, "closest example");
                return Some(example.to_string());
            }
        }

        if !name.contains('/') {
            return None;
        }
        let repaired = LayeredSuggester::by_segment_prefix(name, corpus).filter(|s| s != name);
        if let Some(suggestion) = &repaired {
            tracing::debug!(branch = name, %suggestion, "segment-prefix fallback");
        }
        repaired
    }
}
