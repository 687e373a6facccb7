use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    code::Code,
    email::Email,
    password::{PasswordHash, PasswordPolicy},
    role::Role,
    user_id::UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Email is null or undefined")]
    MissingEmail,
    #[error("Email is not a valid email")]
    InvalidEmail,
    #[error("Password is null or undefined")]
    MissingPassword,
    #[error("Password does not meet requirements")]
    WeakPassword,
    #[error("Invalid activation code")]
    InvalidActivationCode,
    #[error("User id is null or undefined")]
    MissingUserId,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Input for `User::create`.
#[derive(Debug, Default)]
pub struct NewUser {
    pub uid: Option<UserId>,
    pub email: String,
    pub password_hash: Option<PasswordHash>,
    pub role: Option<Role>,
    pub google_id: Option<String>,
}

/// Account aggregate. State only changes through the methods below.
#[derive(Debug, Clone)]
pub struct User {
    uid: UserId,
    email: Email,
    password_hash: Option<PasswordHash>,
    role: Role,
    is_active: bool,
    activation_code: Option<Code>,
    reset_code: Option<Code>,
    google_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Registers a new account.
    ///
    /// Local accounts start inactive; federated ones (with a `google_id`) are
    /// active and need no password. Both get a fresh activation code.
    pub fn create(props: NewUser) -> Result<Self, UserError> {
        let email = Email::parse(props.email)?;
        let password_hash = props.password_hash.filter(|hash| !hash.is_empty());
        let google_id = props.google_id.filter(|id| !id.is_empty());

        if password_hash.is_none() && google_id.is_none() {
            return Err(UserError::MissingPassword);
        }

        Ok(Self {
            uid: props.uid.unwrap_or_default(),
            email,
            password_hash,
            role: props.role.unwrap_or_default(),
            is_active: google_id.is_some(),
            activation_code: Some(Code::generate()),
            reset_code: None,
            google_id,
            created_at: Utc::now(),
        })
    }

    /// Rebuilds an aggregate from its persisted form, re-checking invariants.
    pub fn restore(record: UserRecord) -> Result<Self, UserError> {
        let email = Email::parse(record.email)?;
        let uid = UserId::parse(record.uid)?;
        let role = record.role.parse::<Role>()?;
        let password_hash = record
            .password_hash
            .map(PasswordHash::new)
            .filter(|hash| !hash.is_empty());
        let google_id = record.google_id.filter(|id| !id.is_empty());

        if password_hash.is_none() && google_id.is_none() {
            return Err(UserError::MissingPassword);
        }

        let activation_code = record
            .activation_code
            .zip(record.activation_code_created_at)
            .map(|(code, created_at)| Code::new(code, created_at));
        let reset_code = record
            .reset_code
            .zip(record.reset_code_created_at)
            .map(|(code, created_at)| Code::new(code, created_at));

        Ok(Self {
            uid,
            email,
            password_hash,
            role,
            is_active: record.is_active,
            activation_code,
            reset_code,
            google_id,
            created_at: record.created_at,
        })
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            uid: self.uid.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            password_hash: self
                .password_hash
                .as_ref()
                .map(|hash| hash.as_ref().expose_secret().clone()),
            role: self.role.as_str().to_owned(),
            is_active: self.is_active,
            activation_code: self.activation_code.as_ref().map(|c| c.as_str().to_owned()),
            activation_code_created_at: self.activation_code.as_ref().map(Code::created_at),
            reset_code: self.reset_code.as_ref().map(|c| c.as_str().to_owned()),
            reset_code_created_at: self.reset_code.as_ref().map(Code::created_at),
            google_id: self.google_id.clone(),
            created_at: self.created_at,
        }
    }

    pub fn uid(&self) -> &UserId {
        &self.uid
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> Option<&PasswordHash> {
        self.password_hash.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn activation_code(&self) -> Option<&Code> {
        self.activation_code.as_ref()
    }

    pub fn reset_code(&self) -> Option<&Code> {
        self.reset_code.as_ref()
    }

    pub fn google_id(&self) -> Option<&str> {
        self.google_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// A federated account nobody has attached a local password to yet.
    pub fn is_unclaimed_federated(&self) -> bool {
        self.google_id.is_some() && self.password_hash.is_none()
    }

    /// Flips the account active when `code` matches the live activation code.
    /// The code itself stays until `clear_activation_code` is called.
    pub fn activate_user(&mut self, code: &str) -> Result<(), UserError> {
        match &self.activation_code {
            Some(activation_code) if activation_code.matches(code) => {
                self.is_active = true;
                Ok(())
            }
            _ => Err(UserError::InvalidActivationCode),
        }
    }

    /// Activates an account whose email an identity provider has vouched for.
    /// No activation code is needed, and any pending one is dropped.
    pub fn activate_federated(&mut self) {
        self.is_active = true;
        self.activation_code = None;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = Some(password_hash);
    }

    pub fn set_google_id(&mut self, google_id: impl Into<String>) {
        self.google_id = Some(google_id.into());
    }

    pub fn generate_activation_code(&mut self) {
        self.activation_code = Some(Code::generate());
    }

    pub fn generate_reset_code(&mut self) {
        self.reset_code = Some(Code::generate());
    }

    pub fn set_activation_code(&mut self, code: Code) {
        self.activation_code = Some(code);
    }

    pub fn set_reset_code(&mut self, code: Code) {
        self.reset_code = Some(code);
    }

    /// Equality check against the live reset code. Expiry is not considered
    /// here; callers that need it check `reset_code()` first.
    pub fn validate_reset_code(&self, code: &str) -> bool {
        self.reset_code
            .as_ref()
            .is_some_and(|reset_code| reset_code.matches(code))
    }

    pub fn clear_reset_code(&mut self) {
        self.reset_code = None;
    }

    pub fn clear_activation_code(&mut self) {
        self.activation_code = None;
    }

    pub fn is_valid_password(password: &Secret<String>, policy: &PasswordPolicy) -> bool {
        policy.is_satisfied_by(password.expose_secret())
    }

    pub fn view(&self) -> UserView {
        UserView::from(self)
    }
}

/// Flat persisted form of a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub activation_code: Option<String>,
    pub activation_code_created_at: Option<DateTime<Utc>>,
    pub reset_code: Option<String>,
    pub reset_code_created_at: Option<DateTime<Utc>>,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection of an account, safe to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub uid: UserId,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.as_str().to_owned(),
            role: user.role,
        }
    }
}
