//! Data model for the IT problem diagnosis engine.
//!
//! A [`RuleSet`] is the read-only knowledge base the matching engine scores
//! descriptions against; a [`MatchResult`] is one ranked diagnosis produced
//! for a single description.

pub mod error;
pub mod result;
pub mod rule;
pub mod severity;

pub use error::{ModelError, Result};
pub use result::{MatchKind, MatchResult, TermHit};
pub use rule::{Rule, RuleSet};
pub use severity::Severity;
