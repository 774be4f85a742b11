use chrono::Duration;
use serde::Deserialize;

use super::clock::SystemClock;
use super::errors::SessionError;
use super::ports::Clock;
use super::ports::UserRecord;
use crate::jwt::ClaimSet;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SecretKey;

/// Subject marker carried by every access token.
pub const JWT_SUBJECT: &str = "access";

/// Lifetime of an access token: seven days.
pub const ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 7;

pub fn access_token_ttl() -> Duration {
    Duration::minutes(ACCESS_TOKEN_EXPIRE_MINUTES)
}

/// Payload schema an access token must satisfy once verified.
///
/// `exp` has already been checked by the codec. Keys beyond these are caller
/// content and are ignored.
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    username: String,
}

/// Issues and resolves session access tokens.
///
/// Holds nothing but the clock, so one instance can be shared freely across
/// threads. The secret is supplied on every call.
#[derive(Debug, Clone, Default)]
pub struct SessionTokens<C: Clock = SystemClock> {
    clock: C,
}

impl SessionTokens<SystemClock> {
    /// Create a service reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> SessionTokens<C> {
    /// Create a service with an injected clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Sign caller content as an access token expiring after `expires_in`.
    ///
    /// `sub` and `exp` are always overwritten, whatever the content holds.
    ///
    /// # Arguments
    /// * `content` - Base claims to carry in the token
    /// * `secret` - Signing secret
    /// * `expires_in` - Time to live, counted from the clock's now
    ///
    /// # Errors
    /// * `Issuance` - Expiration overflows the representable range, or token
    ///   encoding failed
    pub fn create_token(
        &self,
        content: ClaimSet,
        secret: &SecretKey,
        expires_in: Duration,
    ) -> Result<String, SessionError> {
        let now = self.clock.now();
        let expire = now.checked_add_signed(expires_in).ok_or_else(|| {
            tracing::error!(reason = "expiration_out_of_range", "Failed to sign access token");
            SessionError::Issuance(JwtError::EncodingFailed(format!(
                "expiration out of range: {} + {}",
                now, expires_in
            )))
        })?;
        let claims = content
            .with_expiration(expire.timestamp())
            .with_subject(JWT_SUBJECT);

        let token = JwtHandler::new(secret).encode(&claims).map_err(|e| {
            tracing::error!(reason = e.reason(), "Failed to sign access token");
            SessionError::Issuance(e)
        })?;

        tracing::debug!(expires_at = %expire, claims = claims.len(), "Access token issued");

        Ok(token)
    }

    /// Issue a seven-day access token for `username`.
    ///
    /// # Errors
    /// * `Issuance` - Token encoding failed
    pub fn issue_access_token(
        &self,
        username: &str,
        secret: &SecretKey,
    ) -> Result<String, SessionError> {
        self.create_token(
            ClaimSet::new().with_username(username),
            secret,
            access_token_ttl(),
        )
    }

    /// Issue a seven-day access token for a user record.
    pub fn issue_access_token_for_user<U: UserRecord + ?Sized>(
        &self,
        user: &U,
        secret: &SecretKey,
    ) -> Result<String, SessionError> {
        self.issue_access_token(user.username(), secret)
    }

    /// Verify `token` and return the username it asserts.
    ///
    /// # Errors
    /// * `TokenInvalid` - Signature, structure, algorithm or expiry check failed
    /// * `MalformedPayload` - Claims lack a string `username` or carry a
    ///   subject other than `access`
    pub fn resolve_username(
        &self,
        token: &str,
        secret: &SecretKey,
    ) -> Result<String, SessionError> {
        let claims = JwtHandler::new(secret)
            .decode(token, self.clock.now())
            .map_err(|e| {
                tracing::warn!(reason = e.reason(), "Access token rejected");
                SessionError::TokenInvalid(e)
            })?;

        let payload: AccessTokenClaims =
            serde_json::from_value(claims.into_value()).map_err(|e| {
                tracing::warn!(reason = "malformed_payload", error = %e, "Access token rejected");
                SessionError::MalformedPayload(e.to_string())
            })?;

        if payload.sub != JWT_SUBJECT {
            tracing::warn!(
                reason = "malformed_payload",
                subject = %payload.sub,
                "Access token rejected"
            );
            return Err(SessionError::MalformedPayload(format!(
                "unexpected subject: {}",
                payload.sub
            )));
        }

        Ok(payload.username)
    }
}
