use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::account::models::Account;
use crate::account::ports::CredentialStorePort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn profile(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
) -> Result<Json<ProfileResponseData>, ApiError> {
    state
        .account_service
        .lookup(authenticated.identity())
        .await
        .map_err(ApiError::from)
        .map(|ref account| Json(account.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub email: String,
}

impl From<&Account> for ProfileResponseData {
    fn from(account: &Account) -> Self {
        Self {
            email: account.identity.as_str().to_string(),
        }
    }
}
