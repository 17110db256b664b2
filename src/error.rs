//! Error types for URL generation

use thiserror::Error;

/// Centralized error type for the crate
///
/// Every failure is synchronous and raised at the call that triggered it.
/// Configuration problems are caught before any signature computation
/// begins; option problems only fail the single build call that saw them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration errors (missing host or secret, invalid signer type,
    /// incomplete storage credentials, malformed YAML, missing env vars)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structurally invalid transformation input (malformed crop and the like)
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Error::InvalidOption(msg.into())
    }
}
