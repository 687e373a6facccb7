use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::AccountService;
use credo_core::{Email, Password, PasswordHasher, Role, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    pub role: Option<String>,
}

#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<U, H>(
    State(service): State<AccountService<U, H>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;
    let role = request.role.map(|role| role.parse::<Role>()).transpose()?;

    let user = service.create_user(email, password, role).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
