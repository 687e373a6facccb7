use credo_core::{TokenIssuer, TokenIssuerError, TokenKind, UserStore, UserView};

use crate::errors::CredentialError;

/// Validate token use case - resolves an access token to its account
pub struct ValidateTokenUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    user_store: &'a U,
    token_issuer: &'a T,
}

impl<'a, U, T> ValidateTokenUseCase<'a, U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    pub fn new(user_store: &'a U, token_issuer: &'a T) -> Self {
        Self {
            user_store,
            token_issuer,
        }
    }

    /// Execute the validate token use case
    ///
    /// # Returns
    /// The public view of the account named by the token, or
    /// `CredentialError::InvalidToken` when the token does not verify, is a
    /// refresh token, or names an account that is gone
    #[tracing::instrument(name = "ValidateTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<UserView, CredentialError> {
        let verified = self.token_issuer.verify(token).await.map_err(|e| match e {
            TokenIssuerError::InvalidToken => CredentialError::InvalidToken,
            other => other.into(),
        })?;

        // Refresh tokens are revoked through the session store only
        if verified.kind != TokenKind::Access {
            return Err(CredentialError::InvalidToken);
        }

        let user = self
            .user_store
            .get_by_id(&verified.claims.uid)
            .await?
            .ok_or(CredentialError::InvalidToken)?;

        Ok(user.view())
    }
}
