use std::sync::Arc;

use credo_core::{Email, Password, PasswordHasher, PasswordPolicy, Role, UserStore, UserView};

use crate::{
    errors::AccountError,
    notifications::NotificationDispatcher,
    use_cases::{
        ActivateUserUseCase, ChangePasswordUseCase, CreateUserUseCase, DeleteUserUseCase,
        FindUserUseCase, ResendActivationCodeUseCase, ResetPasswordRequestUseCase,
        ResetPasswordUseCase,
    },
};

/// Account lifecycle over the injected ports.
///
/// The dispatcher is built once at startup and shared by every clone.
#[derive(Clone)]
pub struct AccountService<U, H> {
    user_store: U,
    password_hasher: H,
    dispatcher: Arc<NotificationDispatcher>,
    password_policy: Arc<PasswordPolicy>,
}

impl<U, H> AccountService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(
        user_store: U,
        password_hasher: H,
        dispatcher: NotificationDispatcher,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            dispatcher: Arc::new(dispatcher),
            password_policy: Arc::new(password_policy),
        }
    }

    pub async fn create_user(
        &self,
        email: Email,
        password: Password,
        role: Option<Role>,
    ) -> Result<UserView, AccountError> {
        CreateUserUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.dispatcher,
            &self.password_policy,
        )
        .execute(email, password, role)
        .await
    }

    pub async fn activate_user(&self, email: Email, code: &str) -> Result<UserView, AccountError> {
        ActivateUserUseCase::new(&self.user_store)
            .execute(email, code)
            .await
    }

    pub async fn resend_activation_code(&self, email: Email) -> Result<(), AccountError> {
        ResendActivationCodeUseCase::new(&self.user_store, &self.dispatcher)
            .execute(email)
            .await
    }

    pub async fn reset_password_request(&self, email: Email) -> Result<(), AccountError> {
        ResetPasswordRequestUseCase::new(&self.user_store, &self.dispatcher)
            .execute(email)
            .await
    }

    pub async fn reset_password(
        &self,
        email: Email,
        code: &str,
        new_password: Password,
    ) -> Result<(), AccountError> {
        ResetPasswordUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.dispatcher,
            &self.password_policy,
        )
        .execute(email, code, new_password)
        .await
    }

    pub async fn change_password(
        &self,
        email: Email,
        password: Password,
        new_password: Password,
    ) -> Result<(), AccountError> {
        ChangePasswordUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.dispatcher,
            &self.password_policy,
        )
        .execute(email, password, new_password)
        .await
    }

    pub async fn delete_user(&self, email: Email) -> Result<(), AccountError> {
        DeleteUserUseCase::new(&self.user_store).execute(email).await
    }

    pub async fn find_user(&self, email: Email) -> Result<UserView, AccountError> {
        FindUserUseCase::new(&self.user_store).execute(email).await
    }
}
