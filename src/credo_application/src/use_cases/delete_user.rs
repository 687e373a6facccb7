use credo_core::{Email, UserStore};

use crate::errors::AccountError;

/// Delete user use case
pub struct DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), AccountError> {
        let user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        self.user_store.delete(user.uid()).await?;

        Ok(())
    }
}
