use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::CredentialsRequest;
use crate::account::ports::CredentialStorePort;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = payload?;
    let credentials = body.try_into_credentials()?;

    state
        .account_service
        .register(credentials)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::OK)
}
