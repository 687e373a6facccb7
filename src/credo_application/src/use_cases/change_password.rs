use credo_core::{
    AccountEvent, Email, Password, PasswordHasher, PasswordPolicy, User, UserError, UserStore,
};

use crate::{errors::AccountError, notifications::NotificationDispatcher};

/// Change password use case - replaces the password of a signed-in account
pub struct ChangePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
    dispatcher: &'a NotificationDispatcher,
    password_policy: &'a PasswordPolicy,
}

impl<'a, U, H> ChangePasswordUseCase<'a, U, H>
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

    /// Execute the change password use case
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Current password
    /// * `new_password` - Replacement, checked against the policy
    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, password, new_password)
    )]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        new_password: Password,
    ) -> Result<(), AccountError> {
        let mut user = self
            .user_store
            .get_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        let Some(current_hash) = user.password_hash() else {
            return Err(AccountError::UserNotFound);
        };

        if !self.password_hasher.compare(&password, current_hash).await? {
            return Err(AccountError::UserNotFound);
        }

        if !User::is_valid_password(new_password.as_ref(), self.password_policy) {
            return Err(UserError::WeakPassword.into());
        }

        let password_hash = self.password_hasher.hash(&new_password).await?;
        user.set_password(password_hash);

        self.user_store.update(&user).await?;

        self.dispatcher.dispatch(AccountEvent::PasswordChanged {
            email: user.email().clone(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use secrecy::ExposeSecret;

    async fn change(
        user_store: &MockUserStore,
        dispatcher: &NotificationDispatcher,
        current: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        let policy = PasswordPolicy::default();
        ChangePasswordUseCase::new(user_store, &PlainPasswordHasher, dispatcher, &policy)
            .execute(
                email("test@example.com"),
                password(current),
                password(new_password),
            )
            .await
    }

    #[tokio::test]
    async fn test_change_password() {
        let user_store = MockUserStore::with_user(active_user("test@example.com")).await;
        let (dispatcher, mut rx) = recording_dispatcher();

        change(&user_store, &dispatcher, PASSWORD, "N3w-Passw0rd")
            .await
            .unwrap();

        let stored = user_store.user("test@example.com").await.unwrap();
        assert_eq!(
            stored.password_hash().unwrap().as_ref().expose_secret(),
            "hashed:N3w-Passw0rd"
        );
        assert!(matches!(
            recv_event(&mut rx).await,
            AccountEvent::PasswordChanged { .. }
        ));
    }

    #[tokio::test]
    async fn test_change_password_wrong_current_password() {
        let user_store = MockUserStore::with_user(active_user("test@example.com")).await;
        let (dispatcher, mut rx) = recording_dispatcher();

        let result = change(&user_store, &dispatcher, "Wr0ng-pass", "N3w-Passw0rd").await;

        assert!(matches!(result, Err(AccountError::UserNotFound)));
        assert_eq!(user_store.writes(), 0);
        assert_no_event(&mut rx).await;
    }

    #[tokio::test]
    async fn test_change_password_federated_account() {
        let user_store = MockUserStore::with_user(federated_user("test@example.com")).await;
        let (dispatcher, _rx) = recording_dispatcher();

        let result = change(&user_store, &dispatcher, PASSWORD, "N3w-Passw0rd").await;

        assert!(matches!(result, Err(AccountError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_change_password_weak_new_password() {
        let user_store = MockUserStore::with_user(active_user("test@example.com")).await;
        let (dispatcher, _rx) = recording_dispatcher();

        let result = change(&user_store, &dispatcher, PASSWORD, "short").await;

        assert!(matches!(
            result,
            Err(AccountError::Validation(UserError::WeakPassword))
        ));
    }
}
