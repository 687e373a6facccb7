use credo_core::{Email, UserStore, UserView};

use crate::errors::AccountError;

/// Find user use case - public view of an account by email
pub struct FindUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> FindUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "FindUserUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<UserView, AccountError> {
        self.user_store
            .get_by_email(&email)
            .await?
            .map(|user| user.view())
            .ok_or(AccountError::UserNotFound)
    }
}
