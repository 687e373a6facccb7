use credo_core::{
    Email, Password, PasswordHasher, RefreshSessionStore, TokenIssuer, TokenPair, UserStore,
    UserView,
};

use crate::{
    errors::CredentialError,
    use_cases::{
        FederatedSignInUseCase, RefreshTokenUseCase, SignInUseCase, SignOutUseCase,
        ValidateTokenUseCase,
    },
};

/// Sign-in and token lifecycle over the injected ports.
///
/// Cheap to clone when the ports are (`Arc`s or handle types), so one value
/// can be handed to every HTTP route as state.
#[derive(Clone)]
pub struct CredentialService<U, H, T, R> {
    user_store: U,
    password_hasher: H,
    token_issuer: T,
    refresh_sessions: R,
}

impl<U, H, T, R> CredentialService<U, H, T, R>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    pub fn new(user_store: U, password_hasher: H, token_issuer: T, refresh_sessions: R) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
            refresh_sessions,
        }
    }

    pub async fn sign_in(
        &self,
        email: Email,
        password: Password,
    ) -> Result<TokenPair, CredentialError> {
        SignInUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.token_issuer,
            &self.refresh_sessions,
        )
        .execute(email, password)
        .await
    }

    pub async fn federated_sign_in(
        &self,
        google_id: String,
        email: Email,
    ) -> Result<TokenPair, CredentialError> {
        FederatedSignInUseCase::new(&self.user_store, &self.token_issuer, &self.refresh_sessions)
            .execute(google_id, email)
            .await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, CredentialError> {
        RefreshTokenUseCase::new(&self.token_issuer, &self.refresh_sessions)
            .execute(refresh_token)
            .await
    }

    pub async fn validate_token(&self, token: &str) -> Result<UserView, CredentialError> {
        ValidateTokenUseCase::new(&self.user_store, &self.token_issuer)
            .execute(token)
            .await
    }

    pub async fn sign_out(&self, refresh_token: &str) -> Result<(), CredentialError> {
        SignOutUseCase::new(&self.refresh_sessions)
            .execute(refresh_token)
            .await
    }
}
