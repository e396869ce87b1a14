#![deny(unsafe_code)]

//! Matching engine that maps a free-text problem description to ranked
//! diagnoses from a [`diag_model::RuleSet`].
//!
//! The pipeline for one description is: normalize the text once, score every
//! rule's trigger terms (phrase, exact word, or verb-stem matches, with a
//! bonus when a negation marker precedes the match), turn the raw score into
//! a confidence, then rank and cap the results.

pub mod engine;
pub mod error;
pub mod negation;
pub mod normalize;
pub mod options;
pub mod rank;
pub mod score;
pub mod term;

pub use crate::engine::MatchingEngine;
pub use crate::error::MatchError;
pub use crate::normalize::normalize_text;
pub use crate::options::MatchingOptions;
pub use crate::rank::rank_results;
