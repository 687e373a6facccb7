use std::fmt;

use super::email::Email;

/// Names under which handlers are registered with the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    CreateUserSendEmail,
    ResetPasswordSendEmail,
    PasswordChanged,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::CreateUserSendEmail => "CreateUserSendEmail",
            EventName::ResetPasswordSendEmail => "ResetPasswordSendEmail",
            EventName::PasswordChanged => "PasswordChanged",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events emitted by the account lifecycle once a transition has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    CreateUserSendEmail {
        email: Email,
        activation_code: String,
    },
    ResetPasswordSendEmail {
        email: Email,
        reset_code: String,
    },
    PasswordChanged {
        email: Email,
    },
}

impl AccountEvent {
    pub fn name(&self) -> EventName {
        match self {
            AccountEvent::CreateUserSendEmail { .. } => EventName::CreateUserSendEmail,
            AccountEvent::ResetPasswordSendEmail { .. } => EventName::ResetPasswordSendEmail,
            AccountEvent::PasswordChanged { .. } => EventName::PasswordChanged,
        }
    }

    pub fn email(&self) -> &Email {
        match self {
            AccountEvent::CreateUserSendEmail { email, .. }
            | AccountEvent::ResetPasswordSendEmail { email, .. }
            | AccountEvent::PasswordChanged { email } => email,
        }
    }
}
