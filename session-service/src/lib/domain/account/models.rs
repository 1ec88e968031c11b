use std::fmt;

use crate::account::errors::IdentityError;

/// Registered account.
///
/// Created on signup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub identity: Identity,
    pub secret: Secret,
}

/// Account identity value type
///
/// Unique, case-sensitive key of an account (an email address in practice).
/// Compared byte for byte; no normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Create a new identity.
    ///
    /// # Arguments
    /// * `identity` - Raw identity string
    ///
    /// # Returns
    /// Validated Identity value object
    ///
    /// # Errors
    /// * `Empty` - Identity is the empty string
    pub fn new(identity: String) -> Result<Self, IdentityError> {
        if identity.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(identity))
    }

    /// Get identity as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque credential material.
///
/// Never printed: `Debug` is redacted so secrets cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    /// Exact comparison against a presented secret.
    ///
    /// Plain `==`, so not constant-time; goes away with hashed storage.
    pub fn matches(&self, presented: &Secret) -> bool {
        self.0 == presented.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Identity and secret presented by a caller at signup or signin.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identity: Identity,
    pub secret: Secret,
}

impl Credentials {
    /// Construct credentials from validated parts.
    pub fn new(identity: Identity, secret: Secret) -> Self {
        Self { identity, secret }
    }
}

impl From<Credentials> for Account {
    fn from(credentials: Credentials) -> Self {
        Self {
            identity: credentials.identity,
            secret: credentials.secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rejects_empty() {
        assert_eq!(Identity::new(String::new()), Err(IdentityError::Empty));
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        let lower = Identity::new("a@x.com".to_string()).unwrap();
        let upper = Identity::new("A@x.com".to_string()).unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower.as_str(), "a@x.com");
    }

    #[test]
    fn test_secret_matches_exactly() {
        let stored = Secret::new("p1".to_string());
        assert!(stored.matches(&Secret::new("p1".to_string())));
        assert!(!stored.matches(&Secret::new("P1".to_string())));
        assert!(!stored.matches(&Secret::new("p1 ".to_string())));
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::new("hunter2".to_string());
        assert!(!format!("{:?}", secret).contains("hunter2"));

        let credentials = Credentials::new(Identity::new("a@x.com".to_string()).unwrap(), secret);
        assert!(!format!("{:?}", credentials).contains("hunter2"));
    }
}
