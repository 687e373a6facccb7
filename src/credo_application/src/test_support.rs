//! Hand-written port doubles shared by the use case tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use credo_core::{
    AccountEvent, Email, EventHandler, EventHandlerError, EventName, NewUser, Password,
    PasswordHash, PasswordHasher, PasswordHasherError, RefreshSessionStore,
    RefreshSessionStoreError, TokenClaims, TokenIssuer, TokenIssuerError, TokenKind, TokenPair,
    User, UserId, UserStore, UserStoreError, VerifiedToken,
};
use secrecy::ExposeSecret;
use tokio::sync::{RwLock, mpsc};

use crate::notifications::NotificationDispatcher;

pub const PASSWORD: &str = "Passw0rd!";

#[derive(Default, Clone)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    unavailable: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub async fn with_user(user: User) -> Self {
        let store = Self::default();
        store.users.write().await.insert(user.uid().clone(), user);
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn user(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email().as_str() == email)
            .cloned()
    }

    fn check_available(&self) -> Result<(), UserStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError("store offline".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        users.insert(user.uid().clone(), user);
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn get_by_id(&self, uid: &UserId) -> Result<Option<User>, UserStoreError> {
        self.check_available()?;
        Ok(self.users.read().await.get(uid).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserStoreError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(user.uid())
            .ok_or(UserStoreError::UserNotFound)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        *stored = user.clone();
        Ok(())
    }

    async fn delete(&self, uid: &UserId) -> Result<(), UserStoreError> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.users
            .write()
            .await
            .remove(uid)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }
}

/// "Hashes" by prefixing, so tests can read back what was stored.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

pub fn plain_hash(password: &str) -> PasswordHash {
    PasswordHash::new(format!("hashed:{password}"))
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(plain_hash(password.as_ref().expose_secret()))
    }

    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(plain_hash(password.as_ref().expose_secret())
            .as_ref()
            .expose_secret()
            == hash.as_ref().expose_secret())
    }
}

/// Issues numbered opaque tokens and remembers what it signed.
#[derive(Default, Clone)]
pub struct FakeTokenIssuer {
    issued: Arc<RwLock<HashMap<String, (TokenClaims, TokenKind)>>>,
    sign_calls: Arc<AtomicUsize>,
}

impl FakeTokenIssuer {
    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenIssuer for FakeTokenIssuer {
    async fn sign(&self, claims: &TokenClaims) -> Result<TokenPair, TokenIssuerError> {
        let n = self.sign_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let pair = TokenPair {
            token: format!("access-{n}"),
            refresh_token: format!("refresh-{n}"),
        };
        let mut issued = self.issued.write().await;
        issued.insert(pair.token.clone(), (claims.clone(), TokenKind::Access));
        issued.insert(
            pair.refresh_token.clone(),
            (claims.clone(), TokenKind::Refresh),
        );
        Ok(pair)
    }

    async fn verify(&self, token: &str) -> Result<VerifiedToken, TokenIssuerError> {
        let issued = self.issued.read().await;
        let (claims, kind) = issued
            .get(token)
            .cloned()
            .ok_or(TokenIssuerError::InvalidToken)?;
        Ok(VerifiedToken {
            claims,
            kind,
            issued_at: 0,
            expires_at: i64::MAX,
        })
    }
}

#[derive(Default, Clone)]
pub struct MockRefreshSessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockRefreshSessionStore {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn contains(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    fn check_available(&self) -> Result<(), RefreshSessionStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RefreshSessionStoreError::DatabaseError(
                "store offline".to_owned(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RefreshSessionStore for MockRefreshSessionStore {
    async fn save(&self, token: String) -> Result<(), RefreshSessionStoreError> {
        self.check_available()?;
        self.tokens.write().await.insert(token);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<String>, RefreshSessionStoreError> {
        self.check_available()?;
        Ok(self.tokens.read().await.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> Result<(), RefreshSessionStoreError> {
        self.check_available()?;
        self.tokens.write().await.remove(token);
        Ok(())
    }
}

pub struct RecordingHandler {
    events: mpsc::UnboundedSender<AccountEvent>,
}

impl RecordingHandler {
    pub fn new(events: mpsc::UnboundedSender<AccountEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    async fn handle(&self, event: &AccountEvent) -> Result<(), EventHandlerError> {
        self.events
            .send(event.clone())
            .map_err(|e| EventHandlerError::DeliveryError(e.to_string()))
    }
}

pub struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    async fn handle(&self, _event: &AccountEvent) -> Result<(), EventHandlerError> {
        Err(EventHandlerError::DeliveryError("smtp down".to_owned()))
    }
}

/// Dispatcher that forwards every event name to the returned receiver.
pub fn recording_dispatcher() -> (NotificationDispatcher, mpsc::UnboundedReceiver<AccountEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler: Arc<dyn EventHandler> = Arc::new(RecordingHandler::new(tx));
    let dispatcher = NotificationDispatcher::builder()
        .register_shared(EventName::CreateUserSendEmail, handler.clone())
        .register_shared(EventName::ResetPasswordSendEmail, handler.clone())
        .register_shared(EventName::PasswordChanged, handler)
        .build();
    (dispatcher, rx)
}

pub async fn recv_event(rx: &mut mpsc::UnboundedReceiver<AccountEvent>) -> AccountEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("event was not dispatched in time")
        .expect("dispatcher dropped")
}

pub async fn assert_no_event(rx: &mut mpsc::UnboundedReceiver<AccountEvent>) {
    let received = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(
        !matches!(received, Ok(Some(_))),
        "unexpected event: {received:?}"
    );
}

pub fn email(address: &str) -> Email {
    Email::parse(address).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::parse(value).unwrap()
}

pub fn inactive_user(address: &str) -> User {
    User::create(NewUser {
        email: address.to_owned(),
        password_hash: Some(plain_hash(PASSWORD)),
        ..Default::default()
    })
    .unwrap()
}

pub fn active_user(address: &str) -> User {
    let mut user = inactive_user(address);
    let code = user.activation_code().unwrap().as_str().to_owned();
    user.activate_user(&code).unwrap();
    user.clear_activation_code();
    user
}

pub fn federated_user(address: &str) -> User {
    User::create(NewUser {
        email: address.to_owned(),
        google_id: Some("google-id".to_owned()),
        ..Default::default()
    })
    .unwrap()
}
