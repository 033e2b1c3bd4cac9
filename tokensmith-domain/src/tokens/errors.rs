use thiserror::Error;
use tokensmith_core::error::CoreError;
use tokensmith_core::types::ColorParseError;

/// Failure to read a token value or an imported document.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed {kind} value '{input}': {reason}")]
    Grammar {
        kind: &'static str,
        input: String,
        reason: String,
    },

    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),
}

impl ParseError {
    pub(crate) fn grammar(kind: &'static str, input: &str, reason: impl Into<String>) -> Self {
        ParseError::Grammar {
            kind,
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token input: {message}")]
    Validation { message: String },

    #[error("Failed to parse tokens: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to serialize tokens: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Delivery of '{target}' failed: {source_error}")]
    ExternalIo {
        target: String,
        #[source]
        source_error: CoreError,
    },
}

impl TokenError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TokenError::Validation {
            message: message.into(),
        }
    }
}
