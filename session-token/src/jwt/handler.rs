use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::ClaimSet;
use super::claims::EXPIRATION_CLAIM;
use super::errors::JwtError;
use super::secret::SecretKey;

/// The only signing algorithm produced or accepted.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT token handler for encoding and decoding tokens.
///
/// Bound to a single secret and pinned to HS256: tokens whose header names
/// any other algorithm, including `none`, are refused.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Shared secret for signing and verification
    pub fn new(secret: &SecretKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// No validation of claim content is performed.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// Compact `header.payload.signature` token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(ALGORITHM);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    /// * `now` - Instant the expiration is checked against
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token structure, encoding or payload is invalid
    /// * `UnsupportedAlgorithm` - Header declares an algorithm other than HS256
    /// * `SignatureMismatch` - Signature does not match the secret
    /// * `MissingClaim` - `exp` is absent or not an integer
    /// * `Expired` - `now` has reached `exp`
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<ClaimSet, JwtError> {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<ClaimSet>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::SignatureMismatch,
                    ErrorKind::InvalidAlgorithm | ErrorKind::MissingAlgorithm => {
                        JwtError::UnsupportedAlgorithm
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.expiration().is_none() {
            return Err(JwtError::MissingClaim(EXPIRATION_CLAIM.to_string()));
        }
        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn secret(value: &str) -> SecretKey {
        SecretKey::try_from(value).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn claims_expiring_at(exp: i64) -> ClaimSet {
        ClaimSet::new()
            .with_subject("user123")
            .with_expiration(exp)
            .with_extra("role", "admin")
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(&secret("my_secret_key_at_least_32_bytes_long!"));
        let claims = claims_expiring_at(now().timestamp() + 60);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded = handler.decode(&token, now()).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_header_declares_hs256() {
        let handler = JwtHandler::new(&secret("key"));
        let token = handler
            .encode(&claims_expiring_at(now().timestamp() + 60))
            .unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(&secret("my_secret_key_at_least_32_bytes_long!"));

        for token in ["", "invalid", "invalid.token", "invalid.token.here", "a.b.c.d"] {
            let result = handler.decode(token, now());
            assert!(
                matches!(result, Err(JwtError::Malformed(_))),
                "token {:?} gave {:?}",
                token,
                result
            );
        }
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(&secret("secret1_at_least_32_bytes_long_key!"));
        let handler2 = JwtHandler::new(&secret("secret2_at_least_32_bytes_long_key!"));

        let token = handler1
            .encode(&claims_expiring_at(now().timestamp() + 60))
            .expect("Failed to encode token");

        let result = handler2.decode(&token, now());
        assert_eq!(result, Err(JwtError::SignatureMismatch));
    }

    #[test]
    fn test_decode_rejects_other_algorithms() {
        let key = secret("shared");
        let claims = claims_expiring_at(now().timestamp() + 60);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .unwrap();

        let result = JwtHandler::new(&key).decode(&token, now());
        assert_eq!(result, Err(JwtError::UnsupportedAlgorithm));
    }

    #[test]
    fn test_decode_requires_expiration() {
        let handler = JwtHandler::new(&secret("key"));
        let token = handler
            .encode(&ClaimSet::new().with_username("alice"))
            .unwrap();

        let result = handler.decode(&token, now());
        assert_eq!(result, Err(JwtError::MissingClaim("exp".to_string())));
    }

    #[test]
    fn test_decode_rejects_non_numeric_expiration() {
        let handler = JwtHandler::new(&secret("key"));
        let token = handler
            .encode(&ClaimSet::new().with_extra("exp", "tomorrow"))
            .unwrap();

        let result = handler.decode(&token, now());
        assert_eq!(result, Err(JwtError::MissingClaim("exp".to_string())));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(&secret("key"));
        let exp = now().timestamp();
        let token = handler.encode(&claims_expiring_at(exp)).unwrap();

        assert!(handler
            .decode(&token, now() - chrono::Duration::seconds(1))
            .is_ok());
        assert_eq!(handler.decode(&token, now()), Err(JwtError::Expired));
        assert_eq!(
            handler.decode(&token, now() + chrono::Duration::seconds(1)),
            Err(JwtError::Expired)
        );
    }

    #[test]
    fn test_decode_ignores_audience_claim() {
        let handler = JwtHandler::new(&secret("key"));
        let claims = claims_expiring_at(now().timestamp() + 60).with_extra("aud", "web");
        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.decode(&token, now()), Ok(claims));
    }
}
