//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Tracing filter directive for this level, scoped to quadbatch crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "quadbatch=trace",
            LogLevel::Debug => "quadbatch=debug",
            LogLevel::Info => "quadbatch=info",
            LogLevel::Warn => "quadbatch=warn",
            LogLevel::Error => "quadbatch=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
