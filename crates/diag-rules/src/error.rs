#![deny(unsafe_code)]

use std::path::PathBuf;

use diag_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule document {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rule document {origin}: {message}")]
    InvalidDocument { origin: String, message: String },

    #[error("rule document {origin} contains no usable rules ({skipped} skipped)")]
    NoRules { origin: String, skipped: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
