use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use thiserror::Error;

use crate::account::errors::AccountError;
use crate::account::models::Identity;
use crate::account::ports::CredentialStorePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UNAUTHORIZED_MESSAGE;
use crate::inbound::http::router::AppState;
use crate::session::errors::SessionError;
use crate::session::ports::Clock;
use crate::session::ports::TokenVerifier;

/// Identity resolved by the session gate, stored in request extensions.
///
/// Only the gate can construct it, so a handler that extracts one knows the
/// request carried a valid token for an account that still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    identity: Identity,
}

impl AuthenticatedAccount {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Internal reason a request was turned away. Logged, never sent to the client.
#[derive(Debug, Error)]
enum GateRejection {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("malformed Authorization header")]
    MalformedHeader,

    #[error("token rejected: {0}")]
    Token(#[from] SessionError),

    #[error("account no longer exists: {0}")]
    AccountGone(Identity),

    #[error("account lookup failed: {0}")]
    Lookup(AccountError),
}

impl From<GateRejection> for ApiError {
    fn from(rejection: GateRejection) -> Self {
        match rejection {
            GateRejection::Lookup(err) => ApiError::from(err),
            GateRejection::Token(err) => ApiError::from(err),
            _ => ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()),
        }
    }
}

/// Session gate: verifies the bearer token, re-resolves the account and
/// attaches it to the request before the protected handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = resolve_identity(&state, req.headers())
        .await
        .map_err(|rejection| {
            tracing::warn!(reason = %rejection, "Session rejected");
            ApiError::from(rejection)
        })?;

    tracing::debug!(identity = %identity, "Session authorized");

    req.extensions_mut()
        .insert(AuthenticatedAccount { identity });

    Ok(next.run(req).await)
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> Result<Identity, GateRejection> {
    let token = extract_token_from_header(headers)?;

    let claims = state.token_service.verify(token, state.clock.now())?;
    tracing::debug!(identity = %claims.subject, expires_at = %claims.expires_at, "Claims verified");

    match state.account_service.lookup(&claims.subject).await {
        Ok(account) => Ok(account.identity),
        Err(AccountError::NotFound(_)) => Err(GateRejection::AccountGone(claims.subject)),
        Err(err) => Err(GateRejection::Lookup(err)),
    }
}

fn extract_token_from_header(headers: &HeaderMap) -> Result<&str, GateRejection> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(GateRejection::MissingHeader)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(GateRejection::MalformedHeader)?;

    if token.is_empty() {
        return Err(GateRejection::MalformedHeader);
    }

    Ok(token)
}
