//! Proximity-based negation detection.
//!
//! A match counts as negated when a negation marker appears as a whole word
//! within a fixed number of characters before the match start. This is a
//! proximity signal only; it does not parse negation scope.

use regex::Regex;

use crate::error::MatchError;
use crate::normalize::normalize_text;
use crate::options::MatchingOptions;

#[derive(Debug, Clone)]
pub struct NegationDetector {
    marker: Option<Regex>,
    window: usize,
}

impl NegationDetector {
    /// Build a detector from the configured markers.
    ///
    /// An empty marker list yields a detector that never fires.
    pub fn new(options: &MatchingOptions) -> Result<Self, MatchError> {
        let markers: Vec<String> = options
            .negation_markers
            .iter()
            .map(|marker| regex::escape(&normalize_text(marker)))
            .collect();
        let marker = if markers.is_empty() {
            None
        } else {
            let pattern = format!(r"\b(?:{})\b", markers.join("|"));
            Some(Regex::new(&pattern).map_err(|source| MatchError::Pattern {
                term: options.negation_markers.join(", "),
                source,
            })?)
        };
        Ok(Self {
            marker,
            window: options.negation_window,
        })
    }

    /// True if a marker occurs in the window preceding byte offset `start`.
    ///
    /// The window is measured in characters, not bytes. `start` must lie on a
    /// character boundary of `text`.
    pub fn precedes(&self, text: &str, start: usize) -> bool {
        let Some(marker) = &self.marker else {
            return false;
        };
        let Some(window) = preceding_window(text, start, self.window) else {
            return false;
        };
        marker.is_match(window)
    }
}

/// The last `chars` characters of `text` before byte offset `start`.
fn preceding_window(text: &str, start: usize, chars: usize) -> Option<&str> {
    if chars == 0 {
        return None;
    }
    let prefix = text.get(..start)?;
    let from = prefix
        .char_indices()
        .rev()
        .nth(chars - 1)
        .map_or(0, |(index, _)| index);
    Some(&prefix[from..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> NegationDetector {
        NegationDetector::new(&MatchingOptions::default()).unwrap()
    }

    #[test]
    fn test_marker_inside_window() {
        let text = "nao consigo conectar a internet";
        let start = text.find("conectar").unwrap();
        assert!(detector().precedes(text, start));
    }

    #[test]
    fn test_marker_outside_window() {
        let text = "nao sei o que houve mas hoje cedo a internet caiu";
        let start = text.find("internet").unwrap();
        assert!(start > 25);
        assert!(!detector().precedes(text, start));
    }

    fn negated_after(filler: &str, repeat: usize) -> bool {
        let text = format!("nao {} wifi", filler.repeat(repeat));
        let start = text.find("wifi").unwrap();
        detector().precedes(&text, start)
    }

    #[test]
    fn test_window_edge() {
        // "nao " + 20 fillers + " " puts the marker exactly 25 characters back.
        assert!(negated_after("x", 20));
        assert!(!negated_after("x", 21));
    }

    #[test]
    fn test_window_edge_with_multibyte_filler() {
        assert!(negated_after("é", 20));
        assert!(!negated_after("é", 21));
    }

    #[test]
    fn test_marker_must_be_whole_word() {
        let text = "senao o wifi caiu";
        let start = text.find("wifi").unwrap();
        assert!(!detector().precedes(text, start));
    }

    #[test]
    fn test_marker_after_match_is_ignored() {
        let text = "internet nao funciona";
        assert!(!detector().precedes(text, 0));
    }

    #[test]
    fn test_window_counts_characters() {
        assert_eq!(preceding_window("abcdef", 6, 3), Some("def"));
        assert_eq!(preceding_window("ab", 2, 25), Some("ab"));
        assert_eq!(preceding_window("ab", 2, 0), None);
    }

    #[test]
    fn test_disabled_detector() {
        let detector = NegationDetector::new(&MatchingOptions::default().without_negation()).unwrap();
        assert!(!detector.precedes("nao conecta", 4));
    }
}
