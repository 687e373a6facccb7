use credo_core::{
    Email, Password, PasswordHasher, RefreshSessionStore, TokenClaims, TokenIssuer, TokenPair,
    UserStore,
};

use crate::errors::CredentialError;

/// Sign-in use case - exchanges email and password for a token pair
pub struct SignInUseCase<'a, U, H, T, R>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_issuer: &'a T,
    refresh_sessions: &'a R,
}

impl<'a, U, H, T, R> SignInUseCase<'a, U, H, T, R>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    pub fn new(
        user_store: &'a U,
        password_hasher: &'a H,
        token_issuer: &'a T,
        refresh_sessions: &'a R,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
            refresh_sessions,
        }
    }

    /// Execute the sign-in use case
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plaintext password to compare against the stored hash
    ///
    /// # Returns
    /// A fresh access/refresh token pair; the refresh token is recorded as live
    #[tracing::instrument(name = "SignInUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<TokenPair, CredentialError> {
        let user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        if !user.is_active() {
            return Err(CredentialError::InactiveUser);
        }

        // Federated-only accounts have nothing to compare against
        let Some(password_hash) = user.password_hash() else {
            return Err(CredentialError::InvalidCredentials);
        };

        if !self.password_hasher.compare(&password, password_hash).await? {
            return Err(CredentialError::InvalidCredentials);
        }

        issue_session(
            self.token_issuer,
            self.refresh_sessions,
            &TokenClaims::from(&user),
        )
        .await
    }
}

/// Signs a new pair and records its refresh token as live.
pub(crate) async fn issue_session<T, R>(
    token_issuer: &T,
    refresh_sessions: &R,
    claims: &TokenClaims,
) -> Result<TokenPair, CredentialError>
where
    T: TokenIssuer,
    R: RefreshSessionStore,
{
    let pair = token_issuer.sign(claims).await?;
    refresh_sessions.save(pair.refresh_token.clone()).await?;
    Ok(pair)
}
