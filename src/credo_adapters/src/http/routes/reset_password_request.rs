use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::AccountService;
use credo_core::{Email, PasswordHasher, UserStore};

use super::{
    error::ApiError,
    resend_activation_code::{EmailRequest, MessageResponse},
};

#[tracing::instrument(name = "Reset password request", skip_all)]
pub async fn reset_password_request<U, H>(
    State(service): State<AccountService<U, H>>,
    Json(request): Json<EmailRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;

    service.reset_password_request(email).await?;

    Ok((
        StatusCode::ACCEPTED,
        MessageResponse::new("Reset password code sent"),
    ))
}
