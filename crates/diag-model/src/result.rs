//! Output records produced by one analysis call.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// How a trigger term was found in the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Multi-word phrase matched on word boundaries.
    Phrase,
    /// Single word matched on word boundaries.
    Exact,
    /// Verb stem matched as the prefix of a word.
    Stem,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Phrase => "phrase",
            MatchKind::Exact => "exact",
            MatchKind::Stem => "stem",
        }
    }
}

/// Evidence for a single matched trigger term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermHit {
    /// Trigger term as declared by the rule (not normalized).
    pub term: String,
    pub kind: MatchKind,
    /// Contributed weight, including any negation bonus.
    pub weight: f64,
    /// True if a negation marker preceded the match.
    pub negated: bool,
}

/// A candidate diagnosis for one description.
///
/// Display fields are copied from the source rule; no reference back to
/// the rule set is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub rule_id: String,
    pub diagnosis_label: String,
    pub remedy_text: String,
    pub severity: Severity,
    /// Confidence in `(0.0, 1.0]`.
    pub confidence: f64,
    /// Original trigger terms that matched, in the rule's declared order.
    pub matched_terms: Vec<String>,
    /// Per-term breakdown, same order as `matched_terms`.
    pub evidence: Vec<TermHit>,
}

impl MatchResult {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.evidence
            .iter()
            .map(|hit| {
                let negated = if hit.negated { ", negated" } else { "" };
                format!(
                    "{} ({}{}): {:.1}",
                    hit.term,
                    hit.kind.as_str(),
                    negated,
                    hit.weight
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
