use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::CredentialService;
use credo_core::{PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};

use super::{error::ApiError, refresh_token::RefreshTokenRequest};

#[tracing::instrument(name = "Sign out", skip_all)]
pub async fn sign_out<U, H, T, R>(
    State(service): State<CredentialService<U, H, T, R>>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    R: RefreshSessionStore + Clone + 'static,
{
    service.sign_out(&request.refresh_token).await?;

    Ok(StatusCode::NO_CONTENT)
}
