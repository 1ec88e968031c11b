use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::AccountError;
use crate::account::models::Credentials;
use crate::account::models::Identity;
use crate::account::models::Secret;
use crate::session::errors::SessionError;

pub mod health;
pub mod profile;
pub mod signin;
pub mod signup;

/// Client-safe message for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Client-safe message for every signin failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Carries the internal cause for logging; the client gets a fixed message.
    InternalServerError(String),
    UnprocessableEntity(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::UnprocessableEntity(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(cause) => {
                tracing::error!(error = %cause, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidIdentity(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::NotFound(_) | AccountError::Mismatch => {
                ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
            }
            AccountError::Storage(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Invalid(_) | SessionError::Expired => {
                ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
            }
            SessionError::Signing(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// HTTP request body shared by signup and signin (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    email: String,
    password: String,
}

impl CredentialsRequest {
    fn try_into_credentials(self) -> Result<Credentials, AccountError> {
        let identity = Identity::new(self.email)?;
        Ok(Credentials::new(identity, Secret::new(self.password)))
    }
}
