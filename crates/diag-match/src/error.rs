//! Error types for engine construction.

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("invalid matching options: {message}")]
    InvalidOptions { message: String },

    #[error("trigger term '{term}' of rule '{rule_id}' is empty after normalization")]
    EmptyTerm { rule_id: String, term: String },

    #[error("failed to compile pattern for '{term}': {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },
}

impl MatchError {
    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}
