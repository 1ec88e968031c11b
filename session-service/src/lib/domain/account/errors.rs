use thiserror::Error;

/// Error for Identity validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identity must not be empty")]
    Empty,
}

/// Top-level error for all credential store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid identity: {0}")]
    InvalidIdentity(#[from] IdentityError),

    // Domain-level errors
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Credentials do not match")]
    Mismatch,

    // Infrastructure errors
    #[error("Storage error: {0}")]
    Storage(String),
}
