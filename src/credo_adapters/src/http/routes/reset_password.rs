use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::AccountService;
use credo_core::{Email, Password, PasswordHasher, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{error::ApiError, resend_activation_code::MessageResponse};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Secret<String>,
    pub code: String,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<U, H>(
    State(service): State<AccountService<U, H>>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let new_password = Password::try_from(request.new_password)?;

    service
        .reset_password(email, &request.code, new_password)
        .await?;

    Ok((StatusCode::OK, MessageResponse::new("Password changed")))
}
