#![deny(unsafe_code)]

//! Rule set loading for the diagnosis engine.
//!
//! Rule documents are JSON objects keyed by rule id. Document-level problems
//! (missing file, invalid JSON, no usable rules) are fatal; a malformed
//! individual entry is skipped with a warning and reported in [`LoadReport`].

pub mod embedded;
pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::RulesError;
pub use crate::loader::{
    LoadReport, SkippedRule, default_rule_set, load_rule_set, load_rule_set_with_report,
    parse_rule_set, parse_rule_set_with_report,
};
pub use crate::paths::{RULES_ENV_VAR, RuleSource, load_from_source, resolve_rule_source};
