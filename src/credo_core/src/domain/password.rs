use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Plaintext password as supplied by the caller. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: impl Into<String>) -> Result<Self, UserError> {
        Self::try_from(Secret::new(password.into()))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::MissingPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Opaque output of a `PasswordHasher`.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(Secret::new(hash.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Password strength policy: a minimum length plus a set of patterns that
/// must all match somewhere in the candidate.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    rules: Vec<Regex>,
}

impl PasswordPolicy {
    pub fn new<I, S>(min_length: usize, rules: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| Regex::new(rule.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { min_length, rules })
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
            && self.rules.iter().all(|rule| rule.is_match(password))
    }
}

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_PASSWORD_RULES: [&str; 4] = ["[a-z]", "[A-Z]", "[0-9]", "[^a-zA-Z0-9]"];

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_PASSWORD_RULES)
            .expect("default password rules are valid")
    }
}
