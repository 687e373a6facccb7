//! Email side effects of account events.

pub mod email_handlers;

pub use email_handlers::{
    ActivationEmailHandler, PasswordChangedEmailHandler, ResetPasswordEmailHandler,
    email_dispatcher,
};
