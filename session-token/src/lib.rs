//! Session access tokens
//!
//! Issues and validates HS256-signed JWTs asserting a user's identity:
//! - Token codec pinned to HS256 with clock-driven expiry checks
//! - Access token issuance (`sub = "access"`, seven-day lifetime)
//! - Username resolution with separate failure kinds for bad tokens and bad payloads
//!
//! User lookup and request handling stay with the caller. The secret is passed
//! to every operation and never stored.
//!
//! # Examples
//!
//! ## Issue and resolve
//! ```
//! use session_token::{SecretKey, SessionTokens};
//!
//! let secret = SecretKey::try_from("s3cr3t").unwrap();
//! let tokens = SessionTokens::new();
//!
//! let token = tokens.issue_access_token("alice", &secret).unwrap();
//! let username = tokens.resolve_username(&token, &secret).unwrap();
//! assert_eq!(username, "alice");
//! ```
//!
//! ## Pinned clock
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use session_token::{FailureKind, FixedClock, SecretKey, SessionTokens};
//!
//! let secret = SecretKey::try_from("s3cr3t").unwrap();
//! let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//!
//! let token = SessionTokens::with_clock(FixedClock::new(issued_at))
//!     .issue_access_token("alice", &secret)
//!     .unwrap();
//!
//! let later = SessionTokens::with_clock(FixedClock::new(issued_at + Duration::days(8)));
//! let error = later.resolve_username(&token, &secret).unwrap_err();
//! assert_eq!(error.kind(), FailureKind::TokenInvalid);
//! ```

pub mod jwt;
pub mod session;

// Re-export commonly used items
pub use jwt::ClaimSet;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SecretKey;
pub use jwt::SecretKeyError;
pub use session::Clock;
pub use session::FailureKind;
pub use session::FixedClock;
pub use session::SessionError;
pub use session::SessionTokens;
pub use session::SystemClock;
pub use session::UserRecord;
