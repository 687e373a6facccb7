use credo_core::{AccountEvent, Email, UserStore};

use crate::{errors::AccountError, notifications::NotificationDispatcher};

/// Resend activation code use case
pub struct ResendActivationCodeUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a, U> ResendActivationCodeUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U, dispatcher: &'a NotificationDispatcher) -> Self {
        Self {
            user_store,
            dispatcher,
        }
    }

    /// Execute the resend activation code use case
    ///
    /// A new code is only issued once the previous one has expired.
    #[tracing::instrument(name = "ResendActivationCodeUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), AccountError> {
        let mut user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if user.is_active() {
            return Err(AccountError::AlreadyRegistered);
        }

        if user.activation_code().is_some_and(|code| !code.is_expired()) {
            return Err(AccountError::RequestPending);
        }

        user.generate_activation_code();
        self.user_store.update(&user).await?;

        if let Some(code) = user.activation_code() {
            self.dispatcher.dispatch(AccountEvent::CreateUserSendEmail {
                email: user.email().clone(),
                activation_code: code.as_str().to_owned(),
            });
        }

        Ok(())
    }
}
