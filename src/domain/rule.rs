use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{BranchGuardError, Result};
use crate::rules;

/// One acceptable branch-name shape.
///
/// `pattern` is always matched against the whole name; it is wrapped in
/// `^(?:...)$` when compiled, so table authors cannot accidentally write a
/// substring rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRule {
    pub id: String,
    pub pattern: String,
    /// Human readable form shown in failure messages. Falls back to `pattern`.
    #[serde(default)]
    pub shape: Option<String>,
    pub example: String,
}

impl NamingRule {
    pub fn new(
        id: impl Into<String>,
        pattern: impl Into<String>,
        shape: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        NamingRule {
            id: id.into(),
            pattern: pattern.into(),
            shape: Some(shape.into()),
            example: example.into(),
        }
    }

    /// The form listed to users, e.g. `feature/KP2-[A/B]/sprint[number]`.
    pub fn display_shape(&self) -> &str {
        self.shape.as_deref().unwrap_or(&self.pattern)
    }
}

/// A head-branch shape exempt from the merge-direction warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRule {
    pub id: String,
    pub pattern: String,
}

impl ExclusionRule {
    pub fn new(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        ExclusionRule {
            id: id.into(),
            pattern: pattern.into(),
        }
    }
}

/// Unanchored, case-insensitive keyword mapped to a canned suggestion.
#[derive(Debug, Clone)]
pub struct KeywordHint {
    regex: Regex,
    pub suggestion: String,
}

impl KeywordHint {
    pub fn new(pattern: &str, suggestion: impl Into<String>) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| BranchGuardError::pattern(pattern, e))?;
        Ok(KeywordHint {
            regex,
            suggestion: suggestion.into(),
        })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Everything a suggestion strategy may draw candidates from.
///
/// `examples` holds one canonical name per naming rule, in table order, so
/// "first wins" tie-breaking follows the table.
#[derive(Debug, Clone)]
pub struct CandidateCorpus {
    pub examples: Vec<String>,
    pub prefixes: Vec<String>,
    pub hints: Vec<KeywordHint>,
}

impl CandidateCorpus {
    pub fn new(examples: Vec<String>, prefixes: Vec<String>, hints: Vec<KeywordHint>) -> Self {
        CandidateCorpus {
            examples,
            prefixes,
            hints,
        }
    }
}

#[derive(Debug, Clone)]
struct Compiled<R> {
    rule: R,
    regex: Regex,
}

/// Compiled, validated naming and exclusion tables.
#[derive(Debug, Clone)]
pub struct RuleSet {
    naming: Vec<Compiled<NamingRule>>,
    exclusions: Vec<Compiled<ExclusionRule>>,
    corpus: CandidateCorpus,
}

fn anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| BranchGuardError::pattern(pattern, e))
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BranchGuardError::config(format!(
                "duplicate {} rule id '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

impl RuleSet {
    /// Compile and validate the given tables.
    ///
    /// Fails when a pattern does not compile, when ids repeat, or when a
    /// naming rule's example does not satisfy its own pattern. Keyword hints
    /// whose suggestion the naming table rejects are left out.
    pub fn new(
        naming: Vec<NamingRule>,
        exclusions: Vec<ExclusionRule>,
        prefixes: Vec<String>,
    ) -> Result<Self> {
        if naming.is_empty() {
            return Err(BranchGuardError::config("naming rule table is empty"));
        }
        ensure_unique_ids("naming", naming.iter().map(|r| r.id.as_str()))?;
        ensure_unique_ids("exclusion", exclusions.iter().map(|r| r.id.as_str()))?;

        let naming = naming
            .into_iter()
            .map(|rule| -> Result<Compiled<NamingRule>> {
                let regex = anchored(&rule.pattern)?;
                if !regex.is_match(&rule.example) {
                    return Err(BranchGuardError::config(format!(
                        "example '{}' does not match naming rule '{}'",
                        rule.example, rule.id
                    )));
                }
                Ok(Compiled { rule, regex })
            })
            .collect::<Result<Vec<_>>>()?;

        let exclusions = exclusions
            .into_iter()
            .map(|rule| -> Result<Compiled<ExclusionRule>> {
                let regex = anchored(&rule.pattern)?;
                Ok(Compiled { rule, regex })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut hints = Vec::new();
        for (pattern, suggestion) in rules::default_keyword_hints() {
            if !naming.iter().any(|c| c.regex.is_match(&suggestion)) {
                tracing::debug!(%suggestion, "keyword hint dropped, not a valid name here");
                continue;
            }
            hints.push(KeywordHint::new(&pattern, suggestion)?);
        }

        let examples = naming.iter().map(|c| c.rule.example.clone()).collect();

        Ok(RuleSet {
            naming,
            exclusions,
            corpus: CandidateCorpus::new(examples, prefixes, hints),
        })
    }

    /// The built-in taxonomy.
    pub fn builtin() -> Result<Self> {
        RuleSet::new(
            rules::default_naming_rules(),
            rules::default_exclusion_rules(),
            rules::default_prefix_candidates(),
        )
    }

    /// First naming rule matching the whole name, if any.
    pub fn find_naming(&self, name: &str) -> Option<&NamingRule> {
        self.naming
            .iter()
            .find(|c| c.regex.is_match(name))
            .map(|c| &c.rule)
    }

    /// First exclusion rule matching the whole name, if any.
    pub fn find_exclusion(&self, name: &str) -> Option<&ExclusionRule> {
        self.exclusions
            .iter()
            .find(|c| c.regex.is_match(name))
            .map(|c| &c.rule)
    }

    pub fn naming_rules(&self) -> impl Iterator<Item = &NamingRule> {
        self.naming.iter().map(|c| &c.rule)
    }

    pub fn exclusion_rules(&self) -> impl Iterator<Item = &ExclusionRule> {
        self.exclusions.iter().map(|c| &c.rule)
    }

    pub fn corpus(&self) -> &CandidateCorpus {
        &self.corpus
    }
}
