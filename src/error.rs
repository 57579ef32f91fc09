//! Error types for the library surface.
use thiserror::Error;

/// Errors raised when user-supplied text cannot be turned into a typed value.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("invalid timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown locale '{0}'")]
    Locale(String),
}
