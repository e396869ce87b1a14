//! Embedded default knowledge base.
//!
//! Eight categories covering performance, malware, hardware, connectivity,
//! storage, overheating, peripherals, and operating system problems.

/// Default rule document, compiled into the binary.
pub const DEFAULT_RULES_JSON: &str = include_str!("../data/default_rules.json");

/// Origin label used in logs and errors for the embedded document.
pub const EMBEDDED_ORIGIN: &str = "<embedded default rules>";
