//! Breakpoint resolution and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// A problem found while resolving a breakpoint query.
///
/// These are never returned to callers of the resolver. They are formatted and
/// reported through the active [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// The requested name is not in the breakpoint table.
    #[error("Breakpoint \"{name}\" was not found.")]
    NotFound { name: String },
}

/// Error returned when loading a breakpoint table from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read breakpoint config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON breakpoint config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML breakpoint config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "unsupported breakpoint config extension for {} (expected .json, .yaml or .yml)",
        .0.display()
    )]
    UnsupportedFormat(PathBuf),

    #[error("breakpoint '{name}' has invalid threshold {value} (expected a finite, non-negative width)")]
    InvalidThreshold { name: String, value: f64 },
}
