use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("rule id must not be empty")]
    EmptyRuleId,
    #[error("rule '{rule_id}' has no trigger terms")]
    NoTriggerTerms { rule_id: String },
    #[error("rule '{rule_id}' has a blank trigger term")]
    BlankTriggerTerm { rule_id: String },
    #[error("rule '{rule_id}' is missing a {field}")]
    MissingField {
        rule_id: String,
        field: &'static str,
    },
    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),
    #[error("rule set is empty")]
    EmptyRuleSet,
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
