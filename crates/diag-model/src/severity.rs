//! Urgency classification attached to every rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Three-level urgency of a diagnosis.
///
/// Variants are declared from least to most urgent so the derived `Ord`
/// gives the ranking `High > Medium > Low` used as the secondary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Returns the canonical English name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    /// Parse a severity label.
    /// Accepts the English names and the Portuguese labels used by rule
    /// documents (`Alto`, `Médio`, `Baixo`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "HIGH" | "ALTO" | "ALTA" => Ok(Severity::High),
            "MEDIUM" | "MÉDIO" | "MEDIO" | "MÉDIA" | "MEDIA" => Ok(Severity::Medium),
            "LOW" | "BAIXO" | "BAIXA" => Ok(Severity::Low),
            _ => Err(ModelError::UnknownSeverity(s.to_string())),
        }
    }
}
