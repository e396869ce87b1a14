//! Per-term matching: phrase, exact word, and verb-stem fallback.

use diag_model::MatchKind;
use regex::Regex;

use crate::error::MatchError;
use crate::normalize::normalize_text;
use crate::options::MatchingOptions;

/// Where and how a term was found in normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    pub kind: MatchKind,
    /// Byte offset of the match start in the normalized text.
    pub start: usize,
}

/// A trigger term compiled into its match patterns.
#[derive(Debug, Clone)]
pub struct CompiledTerm {
    original: String,
    normalized: String,
    is_phrase: bool,
    exact: Regex,
    stem: Option<Regex>,
    base_weight: f64,
}

impl CompiledTerm {
    /// Compile a trigger term.
    ///
    /// Multi-word terms get a phrase pattern only. Single words get an exact
    /// pattern and, when they end in one of the stem suffixes and are long
    /// enough, a stem-prefix pattern as fallback.
    pub fn compile(
        rule_id: &str,
        term: &str,
        options: &MatchingOptions,
        suffixes: &[String],
    ) -> Result<Self, MatchError> {
        let normalized = normalize_text(term);
        if normalized.is_empty() {
            return Err(MatchError::EmptyTerm {
                rule_id: rule_id.to_string(),
                term: term.to_string(),
            });
        }
        let is_phrase = normalized.contains(' ');
        let exact = build_regex(term, &bounded(&normalized))?;

        let stem = if is_phrase || normalized.chars().count() < options.stem_min_len {
            None
        } else {
            suffixes
                .iter()
                .find_map(|suffix| normalized.strip_suffix(suffix.as_str()))
                .map(|stem| build_regex(term, &stem_pattern(stem)))
                .transpose()?
        };

        let base_weight = if is_phrase {
            options.phrase_weight
        } else {
            options.word_weight
        };

        Ok(Self {
            original: term.to_string(),
            normalized,
            is_phrase,
            exact,
            stem,
            base_weight,
        })
    }

    /// Term as declared by the rule.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Folded form the patterns were built from.
    pub(crate) fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Weight contributed by a match, before any negation bonus.
    pub fn base_weight(&self) -> f64 {
        self.base_weight
    }

    /// Find the first occurrence of this term in normalized text.
    pub fn find(&self, text: &str) -> Option<TermMatch> {
        if let Some(found) = self.exact.find(text) {
            let kind = if self.is_phrase {
                MatchKind::Phrase
            } else {
                MatchKind::Exact
            };
            return Some(TermMatch {
                kind,
                start: found.start(),
            });
        }
        self.stem.as_ref()?.find(text).map(|found| TermMatch {
            kind: MatchKind::Stem,
            start: found.start(),
        })
    }
}

/// Whole-word pattern for a normalized term.
///
/// Word-boundary assertions are only placed on edges that are word
/// characters; `\b` next to punctuation would require a word on the other
/// side instead.
fn bounded(normalized: &str) -> String {
    let mut pattern = String::new();
    if normalized.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(normalized));
    if normalized.chars().next_back().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Stem anchored at a word start, followed by any word characters.
fn stem_pattern(stem: &str) -> String {
    format!(r"\b{}\w*", regex::escape(stem))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn build_regex(term: &str, pattern: &str) -> Result<Regex, MatchError> {
    Regex::new(pattern).map_err(|source| MatchError::Pattern {
        term: term.to_string(),
        source,
    })
}
