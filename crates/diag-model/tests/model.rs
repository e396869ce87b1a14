use diag_model::{MatchKind, MatchResult, ModelError, Rule, RuleSet, Severity, TermHit};

fn terms(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn sample_rule(id: &str) -> Rule {
    Rule::new(
        id,
        terms(&["lento", "devagar"]),
        "Problema de Performance",
        "Verificar uso de CPU",
        Severity::Medium,
    )
    .expect("valid rule")
}

#[test]
fn rule_rejects_empty_terms() {
    let err = Rule::new("r1", Vec::new(), "Label", "Remedy", Severity::Low).unwrap_err();
    assert_eq!(
        err,
        ModelError::NoTriggerTerms {
            rule_id: "r1".to_string()
        }
    );
}

#[test]
fn rule_rejects_blank_term_and_blank_label() {
    assert!(matches!(
        Rule::new("r1", terms(&["ok", "  "]), "Label", "Remedy", Severity::Low),
        Err(ModelError::BlankTriggerTerm { .. })
    ));
    assert!(matches!(
        Rule::new("r1", terms(&["\u{303}"]), "Label", "Remedy", Severity::Low),
        Err(ModelError::BlankTriggerTerm { .. })
    ));
    assert!(matches!(
        Rule::new("r1", terms(&["ok"]), " ", "Remedy", Severity::Low),
        Err(ModelError::MissingField { .. })
    ));
    assert!(matches!(
        Rule::new(" ", terms(&["ok"]), "Label", "Remedy", Severity::Low),
        Err(ModelError::EmptyRuleId)
    ));
}

#[test]
fn rule_drops_duplicate_terms_keeping_order() {
    let rule = Rule::new(
        "r1",
        terms(&["trava", "erro", "trava", "crash"]),
        "Label",
        "Remedy",
        Severity::High,
    )
    .unwrap();
    assert_eq!(rule.trigger_terms(), &terms(&["trava", "erro", "crash"])[..]);
}

#[test]
fn rule_set_preserves_order_and_rejects_duplicates() {
    let set = RuleSet::new(vec![sample_rule("b"), sample_rule("a")]).unwrap();
    let ids: Vec<&str> = set.iter().map(Rule::id).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(set.get("a").is_some());
    assert!(set.get("missing").is_none());

    let err = RuleSet::new(vec![sample_rule("a"), sample_rule("a")]).unwrap_err();
    assert_eq!(err, ModelError::DuplicateRuleId("a".to_string()));
    assert_eq!(RuleSet::new(Vec::new()).unwrap_err(), ModelError::EmptyRuleSet);
}

#[test]
fn match_result_serializes_and_explains() {
    let result = MatchResult {
        rule_id: "problema_rede".to_string(),
        diagnosis_label: "Problema de Conectividade".to_string(),
        remedy_text: "Reiniciar modem".to_string(),
        severity: Severity::Low,
        confidence: 0.5,
        matched_terms: vec!["conectar".to_string()],
        evidence: vec![TermHit {
            term: "conectar".to_string(),
            kind: MatchKind::Exact,
            weight: 1.3,
            negated: true,
        }],
    };
    assert_eq!(result.explain(), "conectar (exact, negated): 1.3");

    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["severity"], "Low");
    assert_eq!(json["evidence"][0]["kind"], "exact");
    let round: MatchResult = serde_json::from_value(json).expect("deserialize result");
    assert_eq!(round, result);
}
