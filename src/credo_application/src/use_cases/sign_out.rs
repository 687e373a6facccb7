use credo_core::RefreshSessionStore;

use crate::errors::CredentialError;

/// Sign-out use case - revokes a refresh session
pub struct SignOutUseCase<'a, R>
where
    R: RefreshSessionStore,
{
    refresh_sessions: &'a R,
}

impl<'a, R> SignOutUseCase<'a, R>
where
    R: RefreshSessionStore,
{
    pub fn new(refresh_sessions: &'a R) -> Self {
        Self { refresh_sessions }
    }

    /// Execute the sign-out use case. Unknown tokens are not an error.
    #[tracing::instrument(name = "SignOutUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<(), CredentialError> {
        self.refresh_sessions.delete(refresh_token).await?;

        Ok(())
    }
}
