pub mod claims;
pub mod errors;
pub mod handler;
pub mod secret;

pub use claims::ClaimSet;
pub use errors::JwtError;
pub use errors::SecretKeyError;
pub use handler::JwtHandler;
pub use handler::ALGORITHM;
pub use secret::SecretKey;
