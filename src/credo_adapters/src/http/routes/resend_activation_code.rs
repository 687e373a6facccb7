use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::AccountService;
use credo_core::{Email, PasswordHasher, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct EmailRequest {
    pub email: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[tracing::instrument(name = "Resend activation code", skip_all)]
pub async fn resend_activation_code<U, H>(
    State(service): State<AccountService<U, H>>,
    Json(request): Json<EmailRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;

    service.resend_activation_code(email).await?;

    Ok((
        StatusCode::ACCEPTED,
        MessageResponse::new("Activation code sent"),
    ))
}
