//! Authentication error taxonomy.
//!
//! Three failure classes reach the UI:
//!
//! - `Rejected` - the login endpoint refused the credentials (HTTP 400)
//! - `RegistrationFailed` - the register endpoint failed (HTTP 500)
//! - `Unexpected` - transport failures and any other status
//!
//! The first two carry the server message verbatim and display it as-is.
//! `Unexpected` keeps its detail for logging but displays a generic banner,
//! so the form never sticks in a loading state on an unclassified failure.

use thiserror::Error;

/// Failure outcome of one authentication attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login rejected by the server (HTTP 400).
    #[error("{message}")]
    Rejected { message: String },

    /// Registration failed on the server (HTTP 500).
    #[error("{message}")]
    RegistrationFailed { message: String },

    /// Network error or a status outside the wire contract.
    #[error("something went wrong")]
    Unexpected { detail: String },
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected { message: message.into() }
    }

    pub fn registration_failed(message: impl Into<String>) -> Self {
        Self::RegistrationFailed { message: message.into() }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected { detail: detail.into() }
    }
}
