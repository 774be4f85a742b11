use std::fmt;

use super::errors::SecretKeyError;

/// Shared HMAC secret used to sign and verify tokens.
///
/// Supplied by the caller; never generated or persisted here. The key is
/// redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key material.
    ///
    /// # Errors
    /// * `Empty` - No key material was supplied
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SecretKeyError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SecretKeyError::Empty);
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&"[REDACTED]").finish()
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = SecretKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SecretKey {
    type Error = SecretKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
