pub mod clock;
pub mod errors;
pub mod ports;
pub mod service;

pub use clock::FixedClock;
pub use clock::SystemClock;
pub use errors::FailureKind;
pub use errors::SessionError;
pub use ports::Clock;
pub use ports::UserRecord;
pub use service::SessionTokens;
