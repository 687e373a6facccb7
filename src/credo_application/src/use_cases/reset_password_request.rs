use credo_core::{AccountEvent, Email, UserStore};

use crate::{errors::AccountError, notifications::NotificationDispatcher};

/// Reset password request use case - issues a reset code by email
pub struct ResetPasswordRequestUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a, U> ResetPasswordRequestUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U, dispatcher: &'a NotificationDispatcher) -> Self {
        Self {
            user_store,
            dispatcher,
        }
    }

    #[tracing::instrument(name = "ResetPasswordRequestUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), AccountError> {
        let mut user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if !user.is_active() {
            return Err(AccountError::InactiveUser);
        }

        if user.reset_code().is_some_and(|code| !code.is_expired()) {
            return Err(AccountError::RequestPending);
        }

        user.generate_reset_code();
        self.user_store.update(&user).await?;

        if let Some(code) = user.reset_code() {
            self.dispatcher.dispatch(AccountEvent::ResetPasswordSendEmail {
                email: user.email().clone(),
                reset_code: code.as_str().to_owned(),
            });
        }

        Ok(())
    }
}
