//! Matching engine implementation.

use diag_model::{MatchResult, RuleSet};
use tracing::{debug, debug_span, trace};

use crate::error::MatchError;
use crate::negation::NegationDetector;
use crate::normalize::normalize_text;
use crate::options::MatchingOptions;
use crate::rank::rank_results;
use crate::score::CompiledRule;

/// Engine for scoring problem descriptions against a rule set.
///
/// The rule set is injected at construction and never mutated; all term
/// patterns are compiled up front so an analysis call only runs matches.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    rules: RuleSet,
    compiled: Vec<CompiledRule>,
    negation: NegationDetector,
    options: MatchingOptions,
}

impl MatchingEngine {
    /// Create an engine, validating the options and compiling every rule.
    pub fn new(rules: RuleSet, options: MatchingOptions) -> Result<Self, MatchError> {
        options.validate()?;
        let suffixes = options.normalized_suffixes();
        let compiled = rules
            .iter()
            .map(|rule| CompiledRule::compile(rule, &options, &suffixes))
            .collect::<Result<Vec<_>, _>>()?;
        let negation = NegationDetector::new(&options)?;
        debug!(rules = rules.len(), "matching engine ready");
        Ok(Self {
            rules,
            compiled,
            negation,
            options,
        })
    }

    /// Create an engine with the default options.
    pub fn with_defaults(rules: RuleSet) -> Result<Self, MatchError> {
        Self::new(rules, MatchingOptions::default())
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// Ranked diagnoses for a description, capped at `max_results`.
    pub fn analyze(&self, description: &str) -> Vec<MatchResult> {
        rank_results(self.score_rules(description), Some(self.options.max_results))
    }

    /// Every rule that scored above zero, ranked but not capped.
    pub fn score_all(&self, description: &str) -> Vec<MatchResult> {
        rank_results(self.score_rules(description), None)
    }

    fn score_rules(&self, description: &str) -> Vec<MatchResult> {
        let text = normalize_text(description);
        let span = debug_span!("analyze", chars = text.chars().count());
        let _guard = span.enter();
        if text.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for (rule, compiled) in self.rules.iter().zip(&self.compiled) {
            match compiled.score(rule, &text, &self.negation, self.options.negation_bonus) {
                Some(result) => {
                    debug!(
                        rule_id = rule.id(),
                        confidence = result.confidence,
                        matched = result.matched_terms.len(),
                        "rule matched"
                    );
                    results.push(result);
                }
                None => trace!(rule_id = rule.id(), "rule did not match"),
            }
        }
        results
    }
}
