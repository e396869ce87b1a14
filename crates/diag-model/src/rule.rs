//! Diagnostic rules and the ordered rule set.

use std::collections::BTreeSet;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{ModelError, Result};
use crate::severity::Severity;

/// One diagnostic category.
///
/// Fields are private so a `Rule` can only exist in a validated state:
/// a non-empty id, at least one non-blank trigger term, no duplicate terms,
/// and non-blank display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    id: String,
    trigger_terms: Vec<String>,
    diagnosis_label: String,
    remedy_text: String,
    severity: Severity,
}

impl Rule {
    /// Builds a validated rule.
    ///
    /// A term is blank when nothing but whitespace and combining marks is left
    /// after compatibility decomposition (`"\u{303}"` or `" "`).
    ///
    /// Duplicate trigger terms are dropped, keeping the first occurrence so
    /// the declared order is preserved. Only byte-identical terms are merged
    /// here; terms that differ by case or accents are merged by the matching
    /// engine, which owns text folding.
    pub fn new(
        id: impl Into<String>,
        trigger_terms: Vec<String>,
        diagnosis_label: impl Into<String>,
        remedy_text: impl Into<String>,
        severity: Severity,
    ) -> Result<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ModelError::EmptyRuleId);
        }
        if trigger_terms.is_empty() {
            return Err(ModelError::NoTriggerTerms { rule_id: id });
        }
        if trigger_terms.iter().any(|term| is_blank_term(term)) {
            return Err(ModelError::BlankTriggerTerm { rule_id: id });
        }
        let diagnosis_label = diagnosis_label.into();
        if diagnosis_label.trim().is_empty() {
            return Err(ModelError::MissingField {
                rule_id: id,
                field: "diagnosis label",
            });
        }
        let remedy_text = remedy_text.into();
        if remedy_text.trim().is_empty() {
            return Err(ModelError::MissingField {
                rule_id: id,
                field: "remedy text",
            });
        }

        let mut seen = BTreeSet::new();
        let trigger_terms = trigger_terms
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect();

        Ok(Self {
            id,
            trigger_terms,
            diagnosis_label,
            remedy_text,
            severity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trigger terms in declared order, as written in the source document.
    pub fn trigger_terms(&self) -> &[String] {
        &self.trigger_terms
    }

    pub fn diagnosis_label(&self) -> &str {
        &self.diagnosis_label
    }

    pub fn remedy_text(&self) -> &str {
        &self.remedy_text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

fn is_blank_term(term: &str) -> bool {
    term.nfkd()
        .all(|c| c.is_whitespace() || is_combining_mark(c))
}

/// Ordered, immutable collection of rules keyed by id.
///
/// Iteration follows the order the rules were supplied in, which is the
/// final tie-breaker when ranking results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting an empty list and duplicate ids.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(ModelError::EmptyRuleSet);
        }
        let mut ids = BTreeSet::new();
        for rule in &rules {
            if !ids.insert(rule.id()) {
                return Err(ModelError::DuplicateRuleId(rule.id().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
