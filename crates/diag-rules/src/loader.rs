//! JSON rule document parsing and validation.

use std::fs;
use std::path::Path;

use diag_model::{Rule, RuleSet, Severity};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::embedded::{DEFAULT_RULES_JSON, EMBEDDED_ORIGIN};
use crate::error::RulesError;

/// Raw rule entry as written in the document.
///
/// Every field is optional here so a missing field becomes a skip reason
/// instead of a document-level parse failure.
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default, alias = "palavras_chave")]
    trigger_terms: Option<Vec<String>>,
    #[serde(default, alias = "diagnostico")]
    diagnosis: Option<String>,
    #[serde(default, alias = "solucao")]
    remedy: Option<String>,
    #[serde(default, alias = "severidade")]
    severity: Option<String>,
}

/// A rule entry that was left out of the rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRule {
    pub id: String,
    pub reason: String,
}

/// Outcome of loading a rule document.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub rules: RuleSet,
    pub skipped: Vec<SkippedRule>,
}

/// Load and validate a rule document from disk.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, RulesError> {
    load_rule_set_with_report(path).map(|report| report.rules)
}

/// Load a rule document from disk, keeping the list of skipped entries.
pub fn load_rule_set_with_report(path: &Path) -> Result<LoadReport, RulesError> {
    let contents = fs::read_to_string(path).map_err(|e| RulesError::io(path, e))?;
    parse_rule_set_with_report(&contents, &path.display().to_string())
}

/// Parse a rule document from a JSON string.
pub fn parse_rule_set(json: &str) -> Result<RuleSet, RulesError> {
    parse_rule_set_with_report(json, "<inline>").map(|report| report.rules)
}

/// The knowledge base compiled into the crate.
pub fn default_rule_set() -> Result<RuleSet, RulesError> {
    parse_rule_set_with_report(DEFAULT_RULES_JSON, EMBEDDED_ORIGIN).map(|report| report.rules)
}

/// Parse a rule document, skipping malformed entries.
///
/// `origin` names the document in log lines and errors.
pub fn parse_rule_set_with_report(json: &str, origin: &str) -> Result<LoadReport, RulesError> {
    let document: Value = serde_json::from_str(json).map_err(|source| RulesError::Json {
        origin: origin.to_string(),
        source,
    })?;
    let Value::Object(entries) = document else {
        return Err(RulesError::InvalidDocument {
            origin: origin.to_string(),
            message: format!(
                "expected an object keyed by rule id, found {}",
                value_kind(&document)
            ),
        });
    };

    let mut rules = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (id, entry) in entries {
        match build_rule(&id, entry) {
            Ok(rule) => {
                debug!(
                    rule_id = %id,
                    terms = rule.trigger_terms().len(),
                    severity = %rule.severity(),
                    "rule loaded"
                );
                rules.push(rule);
            }
            Err(reason) => {
                warn!(origin, rule_id = %id, %reason, "skipping malformed rule");
                skipped.push(SkippedRule { id, reason });
            }
        }
    }

    if rules.is_empty() {
        return Err(RulesError::NoRules {
            origin: origin.to_string(),
            skipped: skipped.len(),
        });
    }

    let rules = RuleSet::new(rules)?;
    info!(
        origin,
        rules = rules.len(),
        skipped = skipped.len(),
        "rule set loaded"
    );
    Ok(LoadReport { rules, skipped })
}

fn build_rule(id: &str, entry: Value) -> Result<Rule, String> {
    if !entry.is_object() {
        return Err(format!("expected an object, found {}", value_kind(&entry)));
    }
    let raw: RawRule = serde_json::from_value(entry).map_err(|e| e.to_string())?;

    let trigger_terms = raw
        .trigger_terms
        .ok_or_else(|| "missing trigger term list".to_string())?;
    let diagnosis = raw
        .diagnosis
        .ok_or_else(|| "missing diagnosis label".to_string())?;
    let remedy = raw.remedy.ok_or_else(|| "missing remedy text".to_string())?;
    let severity = raw
        .severity
        .ok_or_else(|| "missing severity".to_string())?
        .parse::<Severity>()
        .map_err(|e| e.to_string())?;

    Rule::new(id, trigger_terms, diagnosis, remedy, severity).map_err(|e| e.to_string())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_keep_document_order() {
        let rules = default_rule_set().expect("default rules");
        let ids: Vec<&str> = rules.iter().map(Rule::id).collect();
        assert_eq!(
            ids,
            vec![
                "problema_lentidao",
                "problema_malware",
                "problema_hardware",
                "problema_rede",
                "problema_armazenamento",
                "problema_sobreaquecimento",
                "problema_perifericos",
                "problema_sistema",
            ]
        );
    }

    #[test]
    fn accepts_portuguese_field_names() {
        let json = r#"{
            "problema_rede": {
                "palavras_chave": ["internet", "wifi"],
                "diagnostico": "Problema de Conectividade",
                "solucao": "Reiniciar modem",
                "severidade": "Baixo"
            }
        }"#;
        let rules = parse_rule_set(json).expect("parse");
        let rule = rules.get("problema_rede").expect("rule");
        assert_eq!(rule.severity(), Severity::Low);
        assert_eq!(rule.trigger_terms(), &["internet".to_string(), "wifi".to_string()][..]);
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&Value::Array(Vec::new())), "an array");
    }
}
