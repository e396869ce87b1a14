use diag_match::{MatchingEngine, normalize_text};
use diag_model::MatchResult;
use diag_rules::default_rule_set;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "não", "nao", "lento", "demora", "vírus", "popup", "tela", "azul", "erro", "internet",
    "conectar", "conectado", "rede", "lenta", "disco", "cheio", "quente", "mouse", "funciona",
    "inicia", "iniciou", "windows", "o", "meu", "computador", "muito", "e", "sem", "xyz",
];

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..16).prop_map(|words| words.join(" "))
}

fn engine() -> MatchingEngine {
    MatchingEngine::with_defaults(default_rule_set().unwrap()).unwrap()
}

fn ordered(a: &MatchResult, b: &MatchResult) -> bool {
    a.confidence > b.confidence || (a.confidence == b.confidence && a.severity >= b.severity)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in r"[a-zA-ZÀ-ÿℌℍℭ𝐀-𝐙𝐚-𝐳Ａ-Ｚａ-ｚ \t\n.,!?-]{0,64}") {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once.clone());
        prop_assert_eq!(once.to_lowercase(), once);
    }

    #[test]
    fn results_respect_invariants(text in description()) {
        let engine = engine();
        let results = engine.analyze(&text);

        prop_assert!(results.len() <= 3);
        for result in &results {
            prop_assert!(result.confidence > 0.0 && result.confidence <= 1.0);
            prop_assert!(!result.matched_terms.is_empty());
            prop_assert_eq!(result.matched_terms.len(), result.evidence.len());
        }
        for pair in results.windows(2) {
            prop_assert!(ordered(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn analysis_is_deterministic(text in description()) {
        let engine = engine();
        prop_assert_eq!(engine.analyze(&text), engine.analyze(&text));
    }

    #[test]
    fn capped_results_are_prefix_of_full_ranking(text in description()) {
        let engine = engine();
        let top = engine.analyze(&text);
        let all = engine.score_all(&text);
        prop_assert_eq!(&all[..top.len()], &top[..]);
    }
}
