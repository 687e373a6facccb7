use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::CredentialService;
use credo_core::{Email, Password, PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Sign in", skip_all)]
pub async fn sign_in<U, H, T, R>(
    State(service): State<CredentialService<U, H, T, R>>,
    Json(request): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    R: RefreshSessionStore + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let tokens = service.sign_in(email, password).await?;

    Ok((StatusCode::OK, Json(tokens)))
}
