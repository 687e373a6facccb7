use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use credo_application::{AccountError, CredentialError};
use credo_core::{ErrorKind, UserError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] UserError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("No token provided")]
    MissingToken,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Account(e) => e.kind(),
            ApiError::Credential(e) => e.kind(),
            ApiError::MissingToken => ErrorKind::Auth,
        }
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Expired => StatusCode::GONE,
        ErrorKind::Auth => StatusCode::UNAUTHORIZED,
        ErrorKind::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = status_for(self.kind());

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}
