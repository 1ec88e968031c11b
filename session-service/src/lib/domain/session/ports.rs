use chrono::DateTime;
use chrono::Utc;

use crate::account::models::Identity;
use crate::session::errors::SessionError;
use crate::session::models::SessionClaims;
use crate::session::models::SignedToken;

/// Produces signed session tokens for verified identities.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a token for `identity` expiring one session lifetime after `now`.
    ///
    /// # Errors
    /// * `Signing` - Token could not be signed
    fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<SignedToken, SessionError>;
}

/// Recovers and validates the claims of a signed session token.
pub trait TokenVerifier: Send + Sync + 'static {
    /// Verify `token` at instant `now`.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, foreign secret, or undecodable claims
    /// * `Expired` - `expires_at` is at or before `now`
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError>;
}

/// Source of the current instant for issuance and expiry checks.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}
