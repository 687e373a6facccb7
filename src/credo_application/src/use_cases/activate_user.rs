use credo_core::{Email, UserStore, UserView};

use crate::errors::AccountError;

/// Activate user use case - consumes the activation code sent by email
pub struct ActivateUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ActivateUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the activate user use case. Activation codes are accepted
    /// regardless of their age.
    #[tracing::instrument(name = "ActivateUserUseCase::execute", skip(self, code))]
    pub async fn execute(&self, email: Email, code: &str) -> Result<UserView, AccountError> {
        let mut user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        user.activate_user(code)?;
        user.clear_activation_code();

        self.user_store.update(&user).await?;

        Ok(user.view())
    }
}
