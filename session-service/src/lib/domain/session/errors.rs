use thiserror::Error;

/// Error for session token operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Signature check failed or claims could not be decoded.
    #[error("Session token is invalid: {0}")]
    Invalid(String),

    #[error("Session token has expired")]
    Expired,

    /// Token could not be produced; a configuration problem, not a caller error.
    #[error("Session token signing failed: {0}")]
    Signing(String),
}
