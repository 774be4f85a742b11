#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde_json::Value;
use session_token::FixedClock;
use session_token::SecretKey;
use session_token::SessionTokens;

pub const SECRET: &str = "s3cr3t";

pub fn secret() -> SecretKey {
    SecretKey::try_from(SECRET).expect("Test secret must not be empty")
}

/// 2024-01-01T00:00:00Z
pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn tokens_at(instant: DateTime<Utc>) -> SessionTokens<FixedClock> {
    SessionTokens::with_clock(FixedClock::new(instant))
}

/// Split a compact token into its three raw segments.
pub fn segments(token: &str) -> (String, String, String) {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "token must have three segments");
    (
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    )
}

pub fn decode_segment(segment: &str) -> Value {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .expect("Segment must be base64url");
    serde_json::from_slice(&bytes).expect("Segment must be JSON")
}

pub fn encode_segment(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("Value must serialize"))
}

/// Replace the header of `token`, keeping its payload and signature.
pub fn with_header(token: &str, header: &Value) -> String {
    let (_, payload, signature) = segments(token);
    format!("{}.{}.{}", encode_segment(header), payload, signature)
}

/// Flip one bit of the decoded signature and re-encode it.
pub fn flip_signature_bit(token: &str, bit: usize) -> String {
    let (header, payload, signature) = segments(token);
    let mut bytes = URL_SAFE_NO_PAD
        .decode(signature)
        .expect("Signature must be base64url");
    bytes[bit / 8] ^= 1 << (bit % 8);
    format!("{}.{}.{}", header, payload, URL_SAFE_NO_PAD.encode(bytes))
}

pub fn signature_bits(token: &str) -> usize {
    let (_, _, signature) = segments(token);
    URL_SAFE_NO_PAD
        .decode(signature)
        .expect("Signature must be base64url")
        .len()
        * 8
}
