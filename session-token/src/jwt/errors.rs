use thiserror::Error;

/// Error type for JWT operations.
///
/// Every decoding failure renders the same message so that a caller echoing
/// the error cannot reveal why a token was refused. Use [`JwtError::reason`]
/// when the cause has to be recorded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid or expired")]
    Malformed(String),

    #[error("Token is invalid or expired")]
    SignatureMismatch,

    #[error("Token is invalid or expired")]
    UnsupportedAlgorithm,

    #[error("Token is invalid or expired")]
    MissingClaim(String),

    #[error("Token is invalid or expired")]
    Expired,
}

impl JwtError {
    /// Stable reason code, suitable for structured logs and metric labels.
    pub fn reason(&self) -> &'static str {
        match self {
            JwtError::EncodingFailed(_) => "encoding_failed",
            JwtError::Malformed(_) => "malformed",
            JwtError::SignatureMismatch => "signature_mismatch",
            JwtError::UnsupportedAlgorithm => "unsupported_algorithm",
            JwtError::MissingClaim(_) => "missing_claim",
            JwtError::Expired => "expired",
        }
    }
}

/// Error for SecretKey validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretKeyError {
    #[error("Secret key must not be empty")]
    Empty,
}
