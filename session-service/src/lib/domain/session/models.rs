use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::models::Identity;

/// Claims carried inside a session token.
///
/// Never stored server-side; a token is the only place they exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub subject: Identity,
    pub expires_at: DateTime<Utc>,
}

/// Opaque signed session token handed to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken(String);

impl SignedToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Bearer credential: keep it out of logs.
impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignedToken(***)")
    }
}
