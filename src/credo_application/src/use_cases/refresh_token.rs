use credo_core::{RefreshSessionStore, TokenIssuer, TokenIssuerError, TokenKind, TokenPair};

use crate::errors::CredentialError;

/// Refresh token use case - rotates a live refresh session into a new pair
pub struct RefreshTokenUseCase<'a, T, R>
where
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    token_issuer: &'a T,
    refresh_sessions: &'a R,
}

impl<'a, T, R> RefreshTokenUseCase<'a, T, R>
where
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    pub fn new(token_issuer: &'a T, refresh_sessions: &'a R) -> Self {
        Self {
            token_issuer,
            refresh_sessions,
        }
    }

    /// Execute the refresh token use case
    ///
    /// The old session is deleted before the new one is saved. If the process
    /// dies in between, neither token is usable and the client signs in again.
    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, CredentialError> {
        if self.refresh_sessions.get(refresh_token).await?.is_none() {
            return Err(CredentialError::InvalidRefreshToken);
        }

        let verified = self
            .token_issuer
            .verify(refresh_token)
            .await
            .map_err(|e| match e {
                TokenIssuerError::InvalidToken => CredentialError::InvalidRefreshToken,
                other => other.into(),
            })?;

        if verified.kind != TokenKind::Refresh {
            return Err(CredentialError::InvalidRefreshToken);
        }

        // Only the payload is re-signed; iat/exp stay behind
        let pair = self.token_issuer.sign(&verified.claims).await?;

        self.refresh_sessions.delete(refresh_token).await?;
        self.refresh_sessions
            .save(pair.refresh_token.clone())
            .await?;

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use credo_core::{RefreshSessionStore, Role, TokenClaims, UserId};

    fn claims() -> TokenClaims {
        TokenClaims {
            uid: UserId::parse("123").unwrap(),
            email: "test@example.com".to_owned(),
            role: Role::User,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_refresh_rotates_session() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        let old = issuer.sign(&claims()).await.unwrap();
        sessions.save(old.refresh_token.clone()).await.unwrap();

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        let new = use_case.execute(&old.refresh_token).await.unwrap();

        assert_ne!(new.refresh_token, old.refresh_token);
        assert!(!sessions.contains(&old.refresh_token).await);
        assert!(sessions.contains(&new.refresh_token).await);

        let verified = issuer.verify(&new.token).await.unwrap();
        assert_eq!(verified.claims, claims());
    }

    #[tokio::test]
    async fn test_rotated_token_cannot_be_reused() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        let old = issuer.sign(&claims()).await.unwrap();
        sessions.save(old.refresh_token.clone()).await.unwrap();

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        use_case.execute(&old.refresh_token).await.unwrap();

        let result = use_case.execute(&old.refresh_token).await;
        assert!(matches!(result, Err(CredentialError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_unsaved_token_is_rejected_even_if_signature_verifies() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        let pair = issuer.sign(&claims()).await.unwrap();

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        let result = use_case.execute(&pair.refresh_token).await;

        assert!(matches!(result, Err(CredentialError::InvalidRefreshToken)));
        assert_eq!(issuer.sign_calls(), 1);
    }

    #[tokio::test]
    async fn test_live_but_unverifiable_token_is_rejected() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        sessions.save("forged".to_owned()).await.unwrap();

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        let result = use_case.execute("forged").await;

        assert!(matches!(result, Err(CredentialError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_access_token_cannot_refresh() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        let pair = issuer.sign(&claims()).await.unwrap();
        sessions.save(pair.token.clone()).await.unwrap();

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        let result = use_case.execute(&pair.token).await;

        assert!(matches!(result, Err(CredentialError::InvalidRefreshToken)));
        assert_eq!(issuer.sign_calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_with_session_store_unavailable() {
        let issuer = FakeTokenIssuer::default();
        let sessions = MockRefreshSessionStore::default();
        sessions.set_unavailable(true);

        let use_case = RefreshTokenUseCase::new(&issuer, &sessions);
        let result = use_case.execute("anything").await;

        assert!(matches!(result, Err(CredentialError::ServerProblem)));
    }
}
