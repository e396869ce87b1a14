//! Rule file location resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use diag_model::RuleSet;

use crate::error::RulesError;
use crate::loader::{default_rule_set, load_rule_set};

/// Environment variable for overriding the rule file.
pub const RULES_ENV_VAR: &str = "DIAG_RULES_PATH";

/// Where a rule set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// The knowledge base compiled into the binary.
    Embedded,
    /// A JSON rule document on disk.
    File(PathBuf),
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSource::Embedded => write!(f, "embedded default rules"),
            RuleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve the rule source.
///
/// Resolution order:
/// 1. Explicit path (e.g. `--rules`)
/// 2. `DIAG_RULES_PATH` environment variable (ignored when empty)
/// 3. Embedded default rules
pub fn resolve_rule_source(explicit: Option<&Path>) -> RuleSource {
    if let Some(path) = explicit {
        return RuleSource::File(path.to_path_buf());
    }
    match std::env::var(RULES_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => RuleSource::File(PathBuf::from(value)),
        _ => RuleSource::Embedded,
    }
}

/// Load the rule set from a resolved source.
pub fn load_from_source(source: &RuleSource) -> Result<RuleSet, RulesError> {
    match source {
        RuleSource::Embedded => default_rule_set(),
        RuleSource::File(path) => load_rule_set(path),
    }
}
