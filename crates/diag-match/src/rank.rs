//! Result ordering and truncation.

use std::cmp::Ordering;

use diag_model::MatchResult;

/// Order results by confidence, then severity, and keep the first `limit`.
///
/// The sort is stable, so results that tie on both keys keep the order they
/// were produced in (rule set order). `None` keeps every result.
pub fn rank_results(mut results: Vec<MatchResult>, limit: Option<usize>) -> Vec<MatchResult> {
    results.sort_by(compare_results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}

/// Descending confidence, then descending severity.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.severity.cmp(&a.severity))
}

#[cfg(test)]
mod tests {
    use diag_model::Severity;

    use super::*;

    fn result(id: &str, confidence: f64, severity: Severity) -> MatchResult {
        MatchResult {
            rule_id: id.to_string(),
            diagnosis_label: id.to_string(),
            remedy_text: String::new(),
            severity,
            confidence,
            matched_terms: Vec::new(),
            evidence: Vec::new(),
        }
    }

    fn ids(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.rule_id.as_str()).collect()
    }

    #[test]
    fn test_confidence_then_severity() {
        let ranked = rank_results(
            vec![
                result("low", 0.5, Severity::Low),
                result("high", 0.5, Severity::High),
                result("best", 0.9, Severity::Low),
            ],
            None,
        );
        assert_eq!(ids(&ranked), vec!["best", "high", "low"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let ranked = rank_results(
            vec![
                result("first", 0.4, Severity::Medium),
                result("second", 0.4, Severity::Medium),
                result("third", 0.4, Severity::Medium),
            ],
            None,
        );
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let results = (0..5)
            .map(|i| result(&format!("r{i}"), f64::from(i) / 10.0, Severity::Low))
            .collect();
        let ranked = rank_results(results, Some(3));
        assert_eq!(ids(&ranked), vec!["r4", "r3", "r2"]);
        assert!(rank_results(Vec::new(), Some(3)).is_empty());
    }
}
