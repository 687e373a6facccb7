use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::CredentialService;
use credo_core::{PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};
use serde::Deserialize;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh_token<U, H, T, R>(
    State(service): State<CredentialService<U, H, T, R>>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    R: RefreshSessionStore + Clone + 'static,
{
    let tokens = service.refresh_token(&request.refresh_token).await?;

    Ok((StatusCode::OK, Json(tokens)))
}
