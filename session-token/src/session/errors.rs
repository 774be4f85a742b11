use std::fmt;

use thiserror::Error;

use crate::jwt::JwtError;

/// Why an identity could not be derived from, or put into, a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Token could not be signed.
    Issuance,
    /// Signature, structure, algorithm or expiry check failed.
    TokenInvalid,
    /// Token verified but its claims do not match the access schema.
    MalformedPayload,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Issuance => "issuance",
            FailureKind::TokenInvalid => "token_invalid",
            FailureKind::MalformedPayload => "malformed_payload",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for session token operations.
///
/// Both resolution failures render the same message; the transport layer can
/// show it verbatim. Use [`SessionError::kind`] to tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unable to issue access token: {0}")]
    Issuance(#[source] JwtError),

    #[error("Cannot resolve identity from token")]
    TokenInvalid(#[source] JwtError),

    #[error("Cannot resolve identity from token")]
    MalformedPayload(String),
}

impl SessionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SessionError::Issuance(_) => FailureKind::Issuance,
            SessionError::TokenInvalid(_) => FailureKind::TokenInvalid,
            SessionError::MalformedPayload(_) => FailureKind::MalformedPayload,
        }
    }
}
