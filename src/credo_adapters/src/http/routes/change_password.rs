use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::AccountService;
use credo_core::{Email, Password, PasswordHasher, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{error::ApiError, resend_activation_code::MessageResponse};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password<U, H>(
    State(service): State<AccountService<U, H>>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let new_password = Password::try_from(request.new_password)?;

    service
        .change_password(email, password, new_password)
        .await?;

    Ok((StatusCode::OK, MessageResponse::new("Password changed")))
}
