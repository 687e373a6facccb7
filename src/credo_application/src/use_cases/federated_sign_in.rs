use credo_core::{
    Email, NewUser, RefreshSessionStore, TokenClaims, TokenIssuer, TokenPair, User, UserStore,
};

use super::sign_in::issue_session;
use crate::errors::CredentialError;

/// Federated sign-in use case - signs in an identity asserted by an external
/// provider, creating or linking the local account on first use
pub struct FederatedSignInUseCase<'a, U, T, R>
where
    U: UserStore,
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    user_store: &'a U,
    token_issuer: &'a T,
    refresh_sessions: &'a R,
}

impl<'a, U, T, R> FederatedSignInUseCase<'a, U, T, R>
where
    U: UserStore,
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    pub fn new(user_store: &'a U, token_issuer: &'a T, refresh_sessions: &'a R) -> Self {
        Self {
            user_store,
            token_issuer,
            refresh_sessions,
        }
    }

    /// Execute the federated sign-in use case
    ///
    /// # Arguments
    /// * `google_id` - Subject id asserted by the provider
    /// * `email` - Email asserted by the provider
    #[tracing::instrument(name = "FederatedSignInUseCase::execute", skip(self, google_id))]
    pub async fn execute(
        &self,
        google_id: String,
        email: Email,
    ) -> Result<TokenPair, CredentialError> {
        let user = match self.user_store.get_by_email(&email).await? {
            Some(mut user) => {
                let linking = user.google_id().is_none();
                if linking {
                    user.set_google_id(google_id);
                }
                let activating = !user.is_active();
                if activating {
                    user.activate_federated();
                }
                if linking || activating {
                    self.user_store.update(&user).await?;
                }
                user
            }
            None => {
                let user = User::create(NewUser {
                    email: email.as_str().to_owned(),
                    google_id: Some(google_id),
                    ..Default::default()
                })?;
                self.user_store.create(user.clone()).await?;
                user
            }
        };

        issue_session(
            self.token_issuer,
            self.refresh_sessions,
            &TokenClaims::from(&user),
        )
        .await
    }
}
