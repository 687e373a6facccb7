use axum::{extract::State, http::StatusCode, response::IntoResponse};
use credo_application::{AccountService, CredentialService};
use credo_core::{Email, PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};

use super::{
    auth::{BearerHeader, bearer_token},
    error::ApiError,
};

/// Deletes the account named by the bearer token.
#[tracing::instrument(name = "Delete user", skip_all)]
pub async fn delete_user<U, H, T, R>(
    State((credentials, accounts)): State<(CredentialService<U, H, T, R>, AccountService<U, H>)>,
    authorization: Option<BearerHeader>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
    R: RefreshSessionStore + Clone + 'static,
{
    let token = bearer_token(&authorization)?;

    let user = credentials.validate_token(token).await?;
    let email = Email::parse(user.email)?;

    accounts.delete_user(email).await?;

    Ok(StatusCode::NO_CONTENT)
}
