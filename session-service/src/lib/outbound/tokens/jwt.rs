use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use chrono::DateTime;
use chrono::Utc;

use crate::account::models::Identity;
use crate::session::errors::SessionError;
use crate::session::models::SessionClaims;
use crate::session::models::SignedToken;
use crate::session::ports::TokenIssuer;
use crate::session::ports::TokenVerifier;

/// Session token adapter backed by the shared HS256 authenticator.
#[derive(Clone)]
pub struct JwtTokenService {
    authenticator: Arc<Authenticator>,
}

impl JwtTokenService {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }
}

impl From<JwtError> for SessionError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EncodingFailed(msg) => SessionError::Signing(msg),
            JwtError::TokenExpired => SessionError::Expired,
            JwtError::InvalidToken(msg) => SessionError::Invalid(msg),
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, identity: &Identity, now: DateTime<Utc>) -> Result<SignedToken, SessionError> {
        let result = self.authenticator.issue(identity.as_str(), now)?;

        tracing::debug!(
            identity = %identity,
            expires_at = result.claims.exp,
            "Session token issued"
        );

        Ok(SignedToken::new(result.access_token))
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError> {
        let claims = self.authenticator.verify(token, now)?;

        let subject = Identity::new(claims.sub.clone())
            .map_err(|e| SessionError::Invalid(format!("bad subject: {}", e)))?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| SessionError::Invalid(format!("exp out of range: {}", claims.exp)))?;

        Ok(SessionClaims {
            subject,
            expires_at,
        })
    }
}
