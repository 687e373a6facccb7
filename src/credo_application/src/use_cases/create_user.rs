use credo_core::{
    AccountEvent, Email, NewUser, Password, PasswordHasher, PasswordPolicy, Role, User, UserError,
    UserStore, UserView,
};

use crate::{errors::AccountError, notifications::NotificationDispatcher};

/// Create user use case - registers a local account, or claims an unclaimed
/// federated one
pub struct CreateUserUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
    dispatcher: &'a NotificationDispatcher,
    password_policy: &'a PasswordPolicy,
}

impl<'a, U, H> CreateUserUseCase<'a, U, H>
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

    /// Execute the create user use case
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Plaintext password, checked against the policy before hashing
    /// * `role` - Role for a new account; ignored when claiming
    ///
    /// # Returns
    /// The public view of the stored account. `CreateUserSendEmail` is emitted
    /// after the account was persisted.
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        role: Option<Role>,
    ) -> Result<UserView, AccountError> {
        let existing = self.user_store.get_by_email(&email).await?;

        if existing
            .as_ref()
            .is_some_and(|user| !user.is_unclaimed_federated())
        {
            return Err(AccountError::AlreadyRegistered);
        }

        if !User::is_valid_password(password.as_ref(), self.password_policy) {
            return Err(UserError::WeakPassword.into());
        }

        let password_hash = self.password_hasher.hash(&password).await?;

        let user = match existing {
            Some(mut user) => {
                user.set_password(password_hash);
                user.generate_activation_code();
                self.user_store.update(&user).await?;
                user
            }
            None => {
                let user = User::create(NewUser {
                    email: email.as_str().to_owned(),
                    password_hash: Some(password_hash),
                    role,
                    ..Default::default()
                })?;
                self.user_store.create(user.clone()).await?;
                user
            }
        };

        if let Some(code) = user.activation_code() {
            self.dispatcher.dispatch(AccountEvent::CreateUserSendEmail {
                email: user.email().clone(),
                activation_code: code.as_str().to_owned(),
            });
        }

        Ok(user.view())
    }
}
