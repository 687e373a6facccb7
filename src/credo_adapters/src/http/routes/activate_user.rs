use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use credo_application::AccountService;
use credo_core::{Email, PasswordHasher, UserStore};

use super::error::ApiError;

#[tracing::instrument(name = "Activate user", skip_all)]
pub async fn activate_user<U, H>(
    State(service): State<AccountService<U, H>>,
    Path((email, code)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::parse(email)?;

    let user = service.activate_user(email, &code).await?;

    Ok((StatusCode::OK, Json(user)))
}
