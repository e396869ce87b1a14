//! Rule scoring: weighted term matches turned into a confidence.

use std::collections::HashSet;

use diag_model::{MatchResult, Rule, TermHit};
use tracing::debug;

use crate::error::MatchError;
use crate::negation::NegationDetector;
use crate::options::MatchingOptions;
use crate::term::CompiledTerm;

/// A rule's trigger terms compiled for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    terms: Vec<CompiledTerm>,
    max_possible: f64,
}

impl CompiledRule {
    pub fn compile(
        rule: &Rule,
        options: &MatchingOptions,
        suffixes: &[String],
    ) -> Result<Self, MatchError> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for term in rule.trigger_terms() {
            let compiled = CompiledTerm::compile(rule.id(), term, options, suffixes)?;
            if seen.insert(compiled.normalized().to_string()) {
                terms.push(compiled);
            } else {
                debug!(rule_id = rule.id(), term = %term, "duplicate trigger term after folding");
            }
        }
        let max_possible = terms.iter().map(CompiledTerm::base_weight).sum();
        Ok(Self {
            terms,
            max_possible,
        })
    }

    /// Score if every term matched without a negation bonus.
    ///
    /// Terms that fold to the same text (`Lento`/`lento`, `lentidão`/`lentidao`)
    /// count once.
    pub fn max_possible(&self) -> f64 {
        self.max_possible
    }

    /// Score this rule against normalized text.
    ///
    /// Returns `None` when no term matched.
    pub fn score(
        &self,
        rule: &Rule,
        text: &str,
        negation: &NegationDetector,
        negation_bonus: f64,
    ) -> Option<MatchResult> {
        let mut raw_score = 0.0;
        let mut evidence = Vec::new();

        for term in &self.terms {
            let Some(found) = term.find(text) else {
                continue;
            };
            let negated = negation.precedes(text, found.start);
            let weight = if negated {
                term.base_weight() + negation_bonus
            } else {
                term.base_weight()
            };
            raw_score += weight;
            evidence.push(TermHit {
                term: term.original().to_string(),
                kind: found.kind,
                weight,
                negated,
            });
        }

        if evidence.is_empty() {
            return None;
        }

        let confidence = (raw_score / self.max_possible).min(1.0);
        Some(MatchResult {
            rule_id: rule.id().to_string(),
            diagnosis_label: rule.diagnosis_label().to_string(),
            remedy_text: rule.remedy_text().to_string(),
            severity: rule.severity(),
            confidence,
            matched_terms: evidence.iter().map(|hit| hit.term.clone()).collect(),
            evidence,
        })
    }
}
