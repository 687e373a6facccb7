use askama::Template;
use credo_application::NotificationDispatcher;
use credo_core::{AccountEvent, EmailClient, EventHandler, EventHandlerError, EventName};
use reqwest::Url;

use crate::config::LinkSettings;

pub const ACTIVATION_SUBJECT: &str = "Welcome to the platform";
pub const RESET_PASSWORD_SUBJECT: &str = "Reset password";
pub const PASSWORD_CHANGED_SUBJECT: &str = "Password changed";

#[derive(Template)]
#[template(
    source = "Welcome!\n\nActivate your account by following this link:\n{{ link }}\n",
    ext = "txt"
)]
struct ActivationText<'a> {
    link: &'a str,
}

#[derive(Template)]
#[template(
    source = "<p>Welcome!</p><p>Activate your account by following <a href=\"{{ link }}\">this link</a>.</p>",
    ext = "html"
)]
struct ActivationHtml<'a> {
    link: &'a str,
}

#[derive(Template)]
#[template(
    source = "A password reset was requested for your account.\n\nChoose a new password here:\n{{ link }}\n\nThe link is valid for one hour.\n",
    ext = "txt"
)]
struct ResetPasswordText<'a> {
    link: &'a str,
}

#[derive(Template)]
#[template(
    source = "<p>A password reset was requested for your account.</p><p><a href=\"{{ link }}\">Choose a new password</a>. The link is valid for one hour.</p>",
    ext = "html"
)]
struct ResetPasswordHtml<'a> {
    link: &'a str,
}

#[derive(Template)]
#[template(source = "Your password has been changed successfully\n", ext = "txt")]
struct PasswordChangedText;

fn render<T: Template>(template: &T) -> Result<String, EventHandlerError> {
    template
        .render()
        .map_err(|e| EventHandlerError::RenderError(e.to_string()))
}

/// `{base}/{email}/{code}`, with both segments percent-encoded.
fn link(base: &str, email: &str, code: &str) -> Result<String, EventHandlerError> {
    let mut url = Url::parse(base)
        .map_err(|e| EventHandlerError::RenderError(format!("invalid link base {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| EventHandlerError::RenderError(format!("link base {base} has no path")))?
        .pop_if_empty()
        .push(email)
        .push(code);
    Ok(url.into())
}

/// Sends the activation link for `CreateUserSendEmail`.
pub struct ActivationEmailHandler<E> {
    email_client: E,
    activation_url: String,
}

impl<E: EmailClient> ActivationEmailHandler<E> {
    pub fn new(email_client: E, activation_url: impl Into<String>) -> Self {
        Self {
            email_client,
            activation_url: activation_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl<E: EmailClient> EventHandler for ActivationEmailHandler<E> {
    #[tracing::instrument(name = "ActivationEmailHandler::handle", skip_all)]
    async fn handle(&self, event: &AccountEvent) -> Result<(), EventHandlerError> {
        let AccountEvent::CreateUserSendEmail {
            email,
            activation_code,
        } = event
        else {
            return Ok(());
        };

        let link = link(&self.activation_url, email.as_str(), activation_code)?;
        let text = render(&ActivationText { link: &link })?;
        let html = render(&ActivationHtml { link: &link })?;

        self.email_client
            .send_email(email, ACTIVATION_SUBJECT, &text, Some(&html))
            .await
            .map_err(EventHandlerError::DeliveryError)
    }
}

/// Sends the reset link for `ResetPasswordSendEmail`.
pub struct ResetPasswordEmailHandler<E> {
    email_client: E,
    reset_password_url: String,
}

impl<E: EmailClient> ResetPasswordEmailHandler<E> {
    pub fn new(email_client: E, reset_password_url: impl Into<String>) -> Self {
        Self {
            email_client,
            reset_password_url: reset_password_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl<E: EmailClient> EventHandler for ResetPasswordEmailHandler<E> {
    #[tracing::instrument(name = "ResetPasswordEmailHandler::handle", skip_all)]
    async fn handle(&self, event: &AccountEvent) -> Result<(), EventHandlerError> {
        let AccountEvent::ResetPasswordSendEmail { email, reset_code } = event else {
            return Ok(());
        };

        let link = link(&self.reset_password_url, email.as_str(), reset_code)?;
        let text = render(&ResetPasswordText { link: &link })?;
        let html = render(&ResetPasswordHtml { link: &link })?;

        self.email_client
            .send_email(email, RESET_PASSWORD_SUBJECT, &text, Some(&html))
            .await
            .map_err(EventHandlerError::DeliveryError)
    }
}

/// Notifies the owner after `PasswordChanged`.
pub struct PasswordChangedEmailHandler<E> {
    email_client: E,
}

impl<E: EmailClient> PasswordChangedEmailHandler<E> {
    pub fn new(email_client: E) -> Self {
        Self { email_client }
    }
}

#[async_trait::async_trait]
impl<E: EmailClient> EventHandler for PasswordChangedEmailHandler<E> {
    #[tracing::instrument(name = "PasswordChangedEmailHandler::handle", skip_all)]
    async fn handle(&self, event: &AccountEvent) -> Result<(), EventHandlerError> {
        let AccountEvent::PasswordChanged { email } = event else {
            return Ok(());
        };

        let text = render(&PasswordChangedText)?;

        self.email_client
            .send_email(email, PASSWORD_CHANGED_SUBJECT, &text, None)
            .await
            .map_err(EventHandlerError::DeliveryError)
    }
}

/// Registration table with one email handler per account event.
pub fn email_dispatcher<E>(email_client: E, links: &LinkSettings) -> NotificationDispatcher
where
    E: EmailClient + Clone + 'static,
{
    NotificationDispatcher::builder()
        .register(
            EventName::CreateUserSendEmail,
            ActivationEmailHandler::new(email_client.clone(), links.activation_url.clone()),
        )
        .register(
            EventName::ResetPasswordSendEmail,
            ResetPasswordEmailHandler::new(email_client.clone(), links.reset_password_url.clone()),
        )
        .register(
            EventName::PasswordChanged,
            PasswordChangedEmailHandler::new(email_client),
        )
        .build()
}
