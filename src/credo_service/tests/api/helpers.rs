use std::time::Duration;

use credo_adapters::{
    Argon2PasswordHasher, HashMapUserStore, HashSetRefreshSessionStore, JwtConfig, JwtTokenIssuer,
    MockEmailClient, SentEmail,
    config::{LinkSettings, test},
    email_dispatcher,
};
use credo_application::{AccountService, CredentialService};
use credo_core::PasswordPolicy;
use credo_service::CredoService;
use secrecy::Secret;
use serde_json::Value;

pub const PASSWORD: &str = "Passw0rd!";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_client: MockEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let refresh_sessions = HashSetRefreshSessionStore::new();
        let hasher = Argon2PasswordHasher::new();
        let issuer = JwtTokenIssuer::new(JwtConfig::new(Secret::new(
            test::JWT_SECRET.to_owned(),
        )));
        let email_client = MockEmailClient::new();

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        // Activation links point back at this server so tests can follow them
        let links = LinkSettings {
            activation_url: format!("{address}/api/user/activate"),
            reset_password_url: "http://localhost/reset-password".to_owned(),
        };

        let credentials =
            CredentialService::new(user_store.clone(), hasher.clone(), issuer, refresh_sessions);
        let accounts = AccountService::new(
            user_store,
            hasher,
            email_dispatcher(email_client.clone(), &links),
            PasswordPolicy::default(),
        );

        let service = CredoService::new(credentials, accounts);
        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            email_client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn create_user(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_json(
            "/user",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn activate(&self, email: &str, code: &str) -> reqwest::Response {
        self.http_client
            .get(self.url(&format!("/user/activate/{email}/{code}")))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_json(
            "/auth/sign-in",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Waits for the dispatcher to deliver a mail with `subject` to `recipient`.
    pub async fn wait_for_email(&self, recipient: &str, subject: &str) -> SentEmail {
        for _ in 0..50 {
            let found = self
                .email_client
                .sent_emails()
                .await
                .into_iter()
                .rev()
                .find(|mail| mail.recipient == recipient && mail.subject == subject);
            if let Some(mail) = found {
                return mail;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("no '{subject}' email for {recipient}");
    }

    /// Last link line in a mail body.
    pub fn link_from(mail: &SentEmail) -> String {
        mail.content
            .lines()
            .filter(|line| line.starts_with("http"))
            .last()
            .expect("mail contains a link")
            .to_owned()
    }

    /// Code at the end of the last link in a mail body.
    pub fn code_from(mail: &SentEmail) -> String {
        Self::link_from(mail)
            .rsplit('/')
            .next()
            .expect("link has a path")
            .to_owned()
    }

    /// Registers, activates and signs in; returns the token pair JSON.
    pub async fn signed_in_user(&self, email: &str) -> Value {
        assert_eq!(self.create_user(email, PASSWORD).await.status().as_u16(), 201);
        let mail = self.wait_for_email(email, "Welcome to the platform").await;
        let code = Self::code_from(&mail);
        assert_eq!(self.activate(email, &code).await.status().as_u16(), 200);

        let response = self.sign_in(email, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.unwrap()
    }
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap_or_default().to_owned()
}
