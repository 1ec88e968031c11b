use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::CredentialsRequest;
use super::INVALID_CREDENTIALS_MESSAGE;
use crate::account::errors::AccountError;
use crate::account::ports::CredentialStorePort;
use crate::inbound::http::router::AppState;
use crate::session::ports::Clock;
use crate::session::ports::TokenIssuer;

pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<SigninResponseData>, ApiError> {
    let Json(body) = payload?;
    let credentials = body.try_into_credentials()?;

    // Unknown identity and wrong secret are indistinguishable to the caller
    let account = state
        .account_service
        .verify(&credentials)
        .await
        .map_err(|e| match e {
            AccountError::NotFound(_) | AccountError::Mismatch => {
                tracing::debug!(identity = %credentials.identity, reason = %e, "Signin rejected");
                ApiError::UnprocessableEntity(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let token = state
        .token_service
        .issue(&account.identity, state.clock.now())?;

    tracing::info!(identity = %account.identity, "Signin succeeded");

    Ok(Json(SigninResponseData {
        jwt_token: token.into_inner(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninResponseData {
    pub jwt_token: String,
}
