//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] toolshed_core::EmailError),

    /// Invalid credentials (wrong password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token could not be signed.
    #[error("token signing error")]
    TokenSigning,

    /// Token missing, malformed, expired, or signed with another secret.
    #[error("invalid or expired token")]
    InvalidToken,
}
