//! CLI library components for the diagnosis tool.

pub mod logging;
pub mod render;
pub mod session;
