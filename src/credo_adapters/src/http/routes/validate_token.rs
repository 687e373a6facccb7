use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use credo_application::CredentialService;
use credo_core::{PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};

use super::{
    auth::{BearerHeader, bearer_token},
    error::ApiError,
};

#[tracing::instrument(name = "Validate token", skip_all)]
pub async fn validate_token<U, H, T, R>(
    State(service): State<CredentialService<U, H, T, R>>,
    authorization: Option<BearerHeader>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    R: RefreshSessionStore + Clone + 'static,
{
    let token = bearer_token(&authorization)?;

    let user = service.validate_token(token).await?;

    Ok((StatusCode::OK, Json(user)))
}
