use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Session lifetime used when a service does not configure its own.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 72;

/// Session token coordinator combining claim construction, signing and expiry checks.
///
/// Stateless apart from the signing key and TTL, so one instance can be shared
/// across request handlers behind an `Arc`.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    session_ttl: Duration,
}

/// Result of a successful token issuance.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Claims embedded in the token
    pub claims: Claims,
}

impl Authenticator {
    /// Create a new authenticator with the default 72 hour session lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_ttl(jwt_secret, Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    /// Create a new authenticator with an explicit session lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `session_ttl` - Lifetime of every issued token
    pub fn with_ttl(jwt_secret: &[u8], session_ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(jwt_secret),
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Issue a signed session token for an already verified subject.
    ///
    /// # Arguments
    /// * `subject` - Account identity placed in `sub`
    /// * `now` - Issuance instant; `exp` is `now + session_ttl`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, JwtError> {
        let claims = Claims::for_subject(subject, now, self.session_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Validate a session token at instant `now`.
    ///
    /// The signature is checked before expiry, so a forged token is reported as
    /// invalid even when its claimed `exp` is in the past.
    ///
    /// # Errors
    /// * `InvalidToken` - Token malformed, forged, or missing required claims
    /// * `TokenExpired` - `exp` is at or before `now`
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
