use crate::domain::{first_segment, CandidateCorpus};

use super::Suggester;

/// Heuristic suggester: each layer is tried in order and the first
/// non-empty result wins.
///
/// A layer result identical to the input is discarded, since repeating the
/// rejected name back is not a correction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredSuggester;

impl LayeredSuggester {
    /// Layer 1: first canonical example that starts with the input.
    pub fn by_prefix(name: &str, corpus: &CandidateCorpus) -> Option<String> {
        let needle = name.to_lowercase();
        corpus
            .examples
            .iter()
            .find(|example| example.to_lowercase().starts_with(&needle))
            .cloned()
    }

    /// Layer 2: swap the input's first segment for the first prefix
    /// candidate whose first segment starts with it, keeping the rest.
    ///
    /// `fron/KP2-12` becomes `front-A/KP2-12`. Without a `/` in the input
    /// there is nothing to keep and the candidate itself is returned.
    pub fn by_segment_prefix(name: &str, corpus: &CandidateCorpus) -> Option<String> {
        let segment = first_segment(name).to_lowercase();
        if segment.is_empty() {
            return None;
        }

        let candidate = corpus
            .prefixes
            .iter()
            .find(|c| first_segment(c).to_lowercase().starts_with(&segment))?;

        let repaired = match name.split_once('/') {
            Some((_, rest)) => format!("{}/{}", first_segment(candidate), rest),
            None => candidate.clone(),
        };
        Some(repaired)
    }

    /// Layer 3: first prefix candidate whose first segment contains the
    /// input's first segment, or is contained by it.
    pub fn by_containment(name: &str, corpus: &CandidateCorpus) -> Option<String> {
        let segment = first_segment(name).to_lowercase();
        if segment.is_empty() {
            return None;
        }

        corpus
            .prefixes
            .iter()
            .find(|c| {
                let theirs = first_segment(c).to_lowercase();
                !theirs.is_empty() && (theirs.contains(&segment) || segment.contains(&theirs))
            })
            .cloned()
    }

    /// Layer 4: canned suggestion for a recognizable keyword.
    pub fn by_keyword(name: &str, corpus: &CandidateCorpus) -> Option<String> {
        corpus
            .hints
            .iter()
            .find(|hint| hint.is_match(name))
            .map(|hint| hint.suggestion.clone())
    }
}

type Layer = fn(&str, &CandidateCorpus) -> Option<String>;

const LAYERS: [(&str, Layer); 4] = [
    ("prefix", LayeredSuggester::by_prefix),
    ("segment-prefix", LayeredSuggester::by_segment_prefix),
    ("containment", LayeredSuggester::by_containment),
    ("keyword", LayeredSuggester::by_keyword),
];

impl Suggester for LayeredSuggester {
    fn suggest(&self, name: &str, corpus: &CandidateCorpus) -> Option<String> {
        if name.is_empty() {
            return None;
        }

        for (layer, run) in LAYERS {
            if let Some(suggestion) = run(name, corpus).filter(|s| s != name) {
                tracing::debug!(branch = name, layer, %suggestion, "layered suggestion");
                return Some(suggestion);
            }
        }
        None
    }
}
