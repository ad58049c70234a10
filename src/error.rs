//! Error types for helpgen.
//!
//! Every variant is terminal for the current run. Nothing is retried
//! internally; the process reports the error and exits non-zero, leaving the
//! queue file in its last saved state.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for helpgen operations.
#[derive(Error, Debug)]
pub enum HelpgenError {
    /// Configuration file unreadable or invalid, or the API credential is missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The queue file could not be opened, read, or replaced.
    #[error("Queue store unavailable: {0}")]
    StoreUnavailable(String),

    /// The queue file was readable but its records have the wrong shape.
    #[error("Queue store corrupt: {0}")]
    StoreCorrupt(String),

    /// Network or service error while requesting the article body.
    #[error("Article generation failed: {0}")]
    GenerationFailed(String),

    /// The service answered but returned no usable content.
    #[error("Article generation returned no content: {0}")]
    GenerationEmpty(String),

    /// The article template could not be read.
    #[error("Template unavailable: {0}")]
    UnknownTemplate(String),

    /// The rendered article could not be written.
    #[error("Failed to write article: {0}")]
    WriteFailed(String),
}

impl HelpgenError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HelpgenError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            HelpgenError::StoreUnavailable(_) | HelpgenError::StoreCorrupt(_) => {
                exit_codes::STORE_FAILURE
            }
            HelpgenError::GenerationFailed(_) | HelpgenError::GenerationEmpty(_) => {
                exit_codes::GENERATION_FAILURE
            }
            HelpgenError::UnknownTemplate(_) | HelpgenError::WriteFailed(_) => {
                exit_codes::OUTPUT_FAILURE
            }
        }
    }
}

/// Result type alias for helpgen operations.
pub type Result<T> = std::result::Result<T, HelpgenError>;
