//! Tuning constants for the matching engine.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::normalize::normalize_text;

/// Default number of ranked results returned per description.
pub const DEFAULT_MAX_RESULTS: usize = 3;
/// Characters inspected before a match when looking for a negation marker.
pub const DEFAULT_NEGATION_WINDOW: usize = 25;
/// Weight added to a term match preceded by a negation marker.
pub const DEFAULT_NEGATION_BONUS: f64 = 0.3;
/// Base weight of a multi-word trigger term.
pub const DEFAULT_PHRASE_WEIGHT: f64 = 1.5;
/// Base weight of a single-word trigger term (exact or stem match).
pub const DEFAULT_WORD_WEIGHT: f64 = 1.0;
/// Minimum term length (in characters) for the stem fallback.
pub const DEFAULT_STEM_MIN_LEN: usize = 5;

/// Matching engine configuration.
///
/// `Default` reproduces the reference behavior: top 3 results, a 25-character
/// negation window with a 0.3 bonus, phrase weight 1.5, word weight 1.0, and
/// stem fallback for Portuguese infinitives (`-ar`, `-er`, `-ir`) of at
/// least five characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingOptions {
    /// Maximum number of results returned by [`crate::MatchingEngine::analyze`].
    pub max_results: usize,
    /// Size of the look-behind window for negation markers, in characters.
    pub negation_window: usize,
    /// Weight added when a negation marker precedes a match.
    pub negation_bonus: f64,
    /// Base weight of multi-word terms.
    pub phrase_weight: f64,
    /// Base weight of single-word terms.
    pub word_weight: f64,
    /// Minimum length of a term eligible for the stem fallback.
    pub stem_min_len: usize,
    /// Suffixes stripped by the stem fallback.
    pub stem_suffixes: Vec<String>,
    /// Whole words treated as negation markers (matched after normalization).
    pub negation_markers: Vec<String>,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            negation_window: DEFAULT_NEGATION_WINDOW,
            negation_bonus: DEFAULT_NEGATION_BONUS,
            phrase_weight: DEFAULT_PHRASE_WEIGHT,
            word_weight: DEFAULT_WORD_WEIGHT,
            stem_min_len: DEFAULT_STEM_MIN_LEN,
            stem_suffixes: vec!["ar".to_string(), "er".to_string(), "ir".to_string()],
            negation_markers: vec!["não".to_string()],
        }
    }
}

impl MatchingOptions {
    /// Set the result cap.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Disable the negation bonus.
    #[must_use]
    pub fn without_negation(mut self) -> Self {
        self.negation_markers.clear();
        self
    }

    /// Checks that the options describe a usable engine.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_results == 0 {
            return Err(MatchError::invalid_options("max_results must be at least 1"));
        }
        if !(self.phrase_weight > 0.0 && self.phrase_weight.is_finite()) {
            return Err(MatchError::invalid_options(
                "phrase_weight must be a positive number",
            ));
        }
        if !(self.word_weight > 0.0 && self.word_weight.is_finite()) {
            return Err(MatchError::invalid_options(
                "word_weight must be a positive number",
            ));
        }
        if !(self.negation_bonus >= 0.0 && self.negation_bonus.is_finite()) {
            return Err(MatchError::invalid_options(
                "negation_bonus must be zero or positive",
            ));
        }
        for suffix in &self.stem_suffixes {
            let normalized = normalize_text(suffix);
            if normalized.is_empty() || normalized.contains(' ') {
                return Err(MatchError::invalid_options(format!(
                    "stem suffix '{suffix}' must be a single non-empty word"
                )));
            }
            if normalized.chars().count() >= self.stem_min_len {
                return Err(MatchError::invalid_options(format!(
                    "stem suffix '{suffix}' is not shorter than stem_min_len"
                )));
            }
        }
        for marker in &self.negation_markers {
            if normalize_text(marker).is_empty() {
                return Err(MatchError::invalid_options(
                    "negation markers must not be blank",
                ));
            }
        }
        Ok(())
    }

    /// Normalized stem suffixes.
    pub(crate) fn normalized_suffixes(&self) -> Vec<String> {
        self.stem_suffixes
            .iter()
            .map(String::as_str)
            .map(normalize_text)
            .collect()
    }
}
