//! Token store error taxonomy

use thiserror::Error;

/// Failures of the token store, one variant per stage a call can fail in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The store handle could not be established
    #[error("Token store connection failed: {message}")]
    Connection { message: String },

    /// An insert was rejected or never reached the store
    #[error("Failed to save {token_type} token: {message}")]
    Write { token_type: String, message: String },

    /// The scan over the table failed
    #[error("Failed to scan token table: {message}")]
    Read { message: String },

    /// A stored record could not be decoded into a token entity
    #[error("Malformed token record, attribute {attribute}: {message}")]
    Deserialization { attribute: String, message: String },

    #[error("Unknown token type: {0}")]
    UnknownTokenType(String),
}

impl TokenError {
    pub fn deserialization(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        TokenError::Deserialization {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Whether the error means stored data is malformed rather than the store being unreachable
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            TokenError::Deserialization { .. } | TokenError::UnknownTokenType(_)
        )
    }
}
