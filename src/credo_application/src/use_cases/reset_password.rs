use credo_core::{
    AccountEvent, Email, Password, PasswordHasher, PasswordPolicy, User, UserError, UserStore,
};

use crate::{errors::AccountError, notifications::NotificationDispatcher};

/// Reset password use case - sets a new password against a live reset code
pub struct ResetPasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
    dispatcher: &'a NotificationDispatcher,
    password_policy: &'a PasswordPolicy,
}

impl<'a, U, H> ResetPasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(
        user_store: &'a U,
        password_hasher: &'a H,
        dispatcher: &'a NotificationDispatcher,
        password_policy: &'a PasswordPolicy,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            dispatcher,
            password_policy,
        }
    }

    /// Execute the reset password use case
    ///
    /// A missing or mismatching code reports `UserNotFound` so the endpoint
    /// cannot be used to guess codes. Expiry is checked on the stored code
    /// before any comparison.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, code, new_password))]
    pub async fn execute(
        &self,
        email: Email,
        code: &str,
        new_password: Password,
    ) -> Result<(), AccountError> {
        let mut user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if !user.is_active() {
            return Err(AccountError::InactiveUser);
        }

        if user.reset_code().is_some_and(|reset_code| reset_code.is_expired()) {
            return Err(AccountError::ResetCodeExpired);
        }

        if !user.validate_reset_code(code) {
            return Err(AccountError::UserNotFound);
        }

        if !User::is_valid_password(new_password.as_ref(), self.password_policy) {
            return Err(UserError::WeakPassword.into());
        }

        let password_hash = self.password_hasher.hash(&new_password).await?;
        user.set_password(password_hash);
        user.clear_reset_code();

        self.user_store.update(&user).await?;

        self.dispatcher.dispatch(AccountEvent::PasswordChanged {
            email: user.email().clone(),
        });

        Ok(())
    }
}
