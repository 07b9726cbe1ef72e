//! Authentication and session ports.

use crate::domain::AdminSession;

/// Turns admin sessions into tamper-proof cookie values and back.
pub trait SessionCodec: Send + Sync {
    /// Serialize and sign a session.
    fn encode(&self, session: &AdminSession) -> Result<String, AuthError>;

    /// Verify and deserialize a session.
    fn decode(&self, token: &str) -> Result<AdminSession, AuthError>;

    /// Lifetime of an encoded session, in seconds.
    fn max_age_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
