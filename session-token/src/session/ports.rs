use chrono::DateTime;
use chrono::Utc;

/// Source of the current time.
///
/// Expiry is computed and checked against this capability, which lets
/// callers pin time in tests.
pub trait Clock: Send + Sync + 'static {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// User record supplied by the user source.
///
/// Only the username is read when issuing a token.
pub trait UserRecord {
    fn username(&self) -> &str;
}
