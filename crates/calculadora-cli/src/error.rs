//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors a CLI run can surface
///
/// Key handling itself never fails; what can fail is the plumbing around it.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}
