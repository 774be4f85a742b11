use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Claim key for the subject (token purpose) marker.
pub const SUBJECT_CLAIM: &str = "sub";

/// Claim key for the expiration timestamp.
pub const EXPIRATION_CLAIM: &str = "exp";

/// Claim key for the user identity.
pub const USERNAME_CLAIM: &str = "username";

/// String-keyed claim mapping carried in a token payload.
///
/// The codec accepts any mapping; the well-known keys only get typed
/// accessors for convenience. Serialises as a plain JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set subject.
    pub fn with_subject(self, sub: impl ToString) -> Self {
        self.with_claim(SUBJECT_CLAIM, Value::String(sub.to_string()))
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(self, exp: i64) -> Self {
        self.with_claim(EXPIRATION_CLAIM, Value::from(exp))
    }

    /// Set username.
    pub fn with_username(self, username: impl ToString) -> Self {
        self.with_claim(USERNAME_CLAIM, Value::String(username.to_string()))
    }

    /// Add a custom field. Values that fail to serialise are skipped.
    pub fn with_extra(self, key: impl ToString, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => self.with_claim(key, json_value),
            Err(_) => self,
        }
    }

    fn with_claim(mut self, key: impl ToString, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn subject(&self) -> Option<&str> {
        self.get(SUBJECT_CLAIM).and_then(Value::as_str)
    }

    /// Expiration as a Unix timestamp, if present and integral.
    pub fn expiration(&self) -> Option<i64> {
        self.get(EXPIRATION_CLAIM).and_then(Value::as_i64)
    }

    pub fn username(&self) -> Option<&str> {
        self.get(USERNAME_CLAIM).and_then(Value::as_str)
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the exact second named by `exp`. Claims
    /// without a usable `exp` are never considered expired here; the decoder
    /// rejects them separately.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.expiration()
            .map_or(false, |exp| exp <= current_timestamp)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
