use diag_match::{MatchingEngine, MatchingOptions};
use diag_model::{MatchKind, Rule, RuleSet, Severity};
use diag_rules::{default_rule_set, parse_rule_set};

fn engine() -> MatchingEngine {
    MatchingEngine::with_defaults(default_rule_set().expect("default rules")).expect("engine")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn slow_computer_matches_performance_rule() {
    let results = engine().analyze("Meu computador está muito lento e demora para abrir os programas");

    assert_eq!(results.len(), 1);
    let performance = &results[0];
    assert_eq!(performance.rule_id, "problema_lentidao");
    assert_eq!(performance.matched_terms, vec!["lento", "demora"]);
    assert_eq!(performance.severity, Severity::Medium);
    assert_close(performance.confidence, 2.0 / 12.0);
}

#[test]
fn negated_connectivity_gets_bonus() {
    let engine = engine();
    let negated =
        engine.analyze("Não consigo conectar à internet mas outros dispositivos funcionam");
    let plain = engine.analyze("Consigo conectar à internet mas outros dispositivos funcionam");

    assert_eq!(negated.len(), 1);
    assert_eq!(negated[0].rule_id, "problema_rede");
    assert_eq!(negated[0].matched_terms, vec!["internet", "conectar"]);
    assert!(negated[0].evidence.iter().all(|hit| hit.negated));
    assert_close(negated[0].confidence, 2.6 / 11.5);

    assert_eq!(plain.len(), 1);
    assert_close(plain[0].confidence, 2.0 / 11.5);
    assert!(negated[0].confidence > plain[0].confidence);
}

#[test]
fn unrelated_text_yields_nothing() {
    assert!(engine().analyze("xyz qwert asdf").is_empty());
    assert!(engine().analyze("").is_empty());
    assert!(engine().analyze("   \n\t ").is_empty());
}

#[test]
fn stem_fallback_matches_inflected_verb() {
    let results = engine().analyze("O computador não inicia mais");

    assert_eq!(results.len(), 1);
    let system = &results[0];
    assert_eq!(system.rule_id, "problema_sistema");
    assert_eq!(system.matched_terms, vec!["iniciar"]);
    assert_eq!(system.evidence[0].kind, MatchKind::Stem);
    assert!(system.evidence[0].negated);
    assert_close(system.confidence, 1.3 / 6.0);
}

#[test]
fn stem_does_not_match_inside_a_word() {
    // "reiniciou" contains the stem "inici" but not at a word start, and
    // "reinicia" only matches as a whole word.
    assert!(engine().analyze("O computador reiniciou sozinho").is_empty());
}

#[test]
fn phrase_terms_weigh_more() {
    let results = engine().analyze("O computador travou e mostrou tela azul de erro");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rule_id, "problema_hardware");
    assert_eq!(results[0].matched_terms, vec!["tela azul", "erro"]);
    assert_eq!(results[0].evidence[0].kind, MatchKind::Phrase);
    assert_close(results[0].confidence, 2.5 / 6.5);
}

#[test]
fn results_are_capped_and_ranked() {
    let engine = engine();
    let text = "pc lento, com vírus, tela azul, sem internet, disco cheio e muito quente";

    let top = engine.analyze(text);
    let ids: Vec<&str> = top.iter().map(|r| r.rule_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "problema_armazenamento",
            "problema_hardware",
            "problema_sobreaquecimento"
        ]
    );

    let all = engine.score_all(text);
    assert_eq!(all.len(), 6);
    assert_eq!(all[..3], top[..]);
}

#[test]
fn severity_breaks_confidence_ties() {
    let rule = |id: &str, severity| {
        Rule::new(id, vec!["wifi".to_string()], id, "Remedy", severity).unwrap()
    };
    let rules = RuleSet::new(vec![
        rule("low_first", Severity::Low),
        rule("medium_a", Severity::Medium),
        rule("high_last", Severity::High),
        rule("medium_b", Severity::Medium),
    ])
    .unwrap();
    let engine = MatchingEngine::with_defaults(rules).unwrap();

    let ids: Vec<String> = engine
        .score_all("sem wifi")
        .into_iter()
        .map(|r| r.rule_id)
        .collect();
    assert_eq!(ids, vec!["high_last", "medium_a", "medium_b", "low_first"]);
}

#[test]
fn accents_and_case_do_not_matter() {
    let engine = engine();
    let accented = engine.analyze("NÃO consigo CONECTAR à INTERNET");
    let folded = engine.analyze("nao consigo conectar a internet");
    assert_eq!(accented, folded);
    assert!(!accented.is_empty());
}

#[test]
fn engine_builds_when_a_rule_entry_is_unusable() {
    let rules = parse_rule_set(
        r#"{
            "bad": { "trigger_terms": ["\u0303"], "diagnosis": "x", "remedy": "y", "severity": "Low" },
            "good": { "trigger_terms": ["wifi"], "diagnosis": "Network", "remedy": "Restart", "severity": "Low" }
        }"#,
    )
    .unwrap();
    let engine = MatchingEngine::with_defaults(rules).unwrap();

    let results = engine.analyze("o wifi caiu");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rule_id, "good");
}

#[test]
fn styled_letters_match_plain_terms() {
    let results = engine().analyze("meu pc esta 𝐋𝐄𝐍𝐓𝐎");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rule_id, "problema_lentidao");
    assert_eq!(results[0].matched_terms, vec!["lento"]);

    let fullwidth = engine().analyze("meu pc esta ＬＥＮＴＯ");
    assert_eq!(fullwidth, results);
}

#[test]
fn custom_result_cap() {
    let options = MatchingOptions::default().with_max_results(1);
    let engine = MatchingEngine::new(default_rule_set().unwrap(), options).unwrap();
    let results = engine.analyze("pc lento, com vírus, tela azul e disco cheio");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rule_id, "problema_armazenamento");
}

#[test]
fn invalid_options_are_rejected() {
    let options = MatchingOptions::default().with_max_results(0);
    assert!(MatchingEngine::new(default_rule_set().unwrap(), options).is_err());
}
