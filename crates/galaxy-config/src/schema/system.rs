//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive covering all galaxy crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "galaxy=trace",
            LogLevel::Debug => "galaxy=debug",
            LogLevel::Info => "galaxy=info",
            LogLevel::Warn => "galaxy=warn",
            LogLevel::Error => "galaxy=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
