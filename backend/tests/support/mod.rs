#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, request::Builder, Request},
    response::Response,
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use buttontrack_backend::{
    config::Config,
    error::AppError,
    models::button::Button,
    models::identity::{UserIdentity, VerifiedIdentity},
    models::press::Press,
    models::session::Session,
    models::user::User,
    repositories::button::ButtonRepository,
    repositories::press::PressRepository,
    repositories::session::SessionRepository,
    repositories::user::UserRepository,
    router,
    services::google_oidc::{IdTokenVerifier, VerifyError},
    state::AppState,
    types::{ButtonId, UserId},
};

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".into(),
        google_client_id: "test-client-id".into(),
        session_expiration_days: 7,
        cookie_secure: false,
        allowed_origins: vec!["http://localhost:3000".into()],
    }
}

#[derive(Default)]
struct StoreInner {
    users: Vec<User>,
    identities: Vec<UserIdentity>,
    sessions: Vec<Session>,
    buttons: Vec<Button>,
    presses: Vec<Press>,
}

/// In-memory stand-in for the PostgreSQL repositories, with the same
/// observable behavior: identity-keyed find-or-create, expiry-checked
/// session resolution, and press cascade on button delete.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_user(&self, name: &str) -> User {
        let user = User::new(Some(name.to_string()));
        let mut inner = self.inner.lock().expect("lock store");
        inner.users.push(user.clone());
        user
    }

    pub fn seed_session(&self, user: &User) -> Session {
        let email = format!("{}@example.com", user.id);
        let session = Session::new(
            user.id,
            &email,
            user.name.as_deref().unwrap_or(""),
            Duration::days(7),
        );
        let mut inner = self.inner.lock().expect("lock store");
        inner.sessions.push(session.clone());
        session
    }

    pub fn seed_expired_session(&self, user: &User) -> Session {
        let mut session = Session::new(user.id, "stale@example.com", "Stale", Duration::days(7));
        session.expires_at = Utc::now() - Duration::hours(1);
        let mut inner = self.inner.lock().expect("lock store");
        inner.sessions.push(session.clone());
        session
    }

    pub fn seed_button(&self, owner: UserId, title: &str, color: &str) -> Button {
        let button = Button::new(owner, title, color);
        let mut inner = self.inner.lock().expect("lock store");
        inner.buttons.push(button.clone());
        button
    }

    pub fn seed_press_at(&self, button_id: ButtonId, pressed_at: DateTime<Utc>) -> Press {
        let mut press = Press::new(button_id);
        press.pressed_at = pressed_at;
        let mut inner = self.inner.lock().expect("lock store");
        inner.presses.push(press.clone());
        press
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().expect("lock store").users.len()
    }

    pub fn identity_count(&self) -> usize {
        self.inner.lock().expect("lock store").identities.len()
    }

    pub fn session_count(&self) -> usize {
        self.inner.lock().expect("lock store").sessions.len()
    }

    pub fn press_count(&self, button_id: ButtonId) -> usize {
        self.inner
            .lock()
            .expect("lock store")
            .presses
            .iter()
            .filter(|p| p.button_id == button_id)
            .count()
    }

    pub fn find_identity(&self, provider: &str, subject: &str) -> Option<UserIdentity> {
        self.inner
            .lock()
            .expect("lock store")
            .identities
            .iter()
            .find(|i| i.provider == provider && i.provider_user_id == subject)
            .cloned()
    }

    pub fn find_user(&self, id: UserId) -> Option<User> {
        self.inner
            .lock()
            .expect("lock store")
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn find_session(&self, session_id: &str) -> Option<Session> {
        self.inner
            .lock()
            .expect("lock store")
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
    }

    pub fn find_button(&self, id: ButtonId) -> Option<Button> {
        self.inner
            .lock()
            .expect("lock store")
            .buttons
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_or_create(
        &self,
        provider: &str,
        identity: &VerifiedIdentity,
    ) -> Result<User, AppError> {
        let mut guard = self.inner.lock().expect("lock store");
        let inner = &mut *guard;
        let now = Utc::now();

        let linked_user_id = inner
            .identities
            .iter_mut()
            .find(|i| i.provider == provider && i.provider_user_id == identity.subject)
            .map(|link| {
                link.email = identity.email.clone();
                link.updated_at = now;
                link.user_id
            });

        match linked_user_id {
            Some(user_id) => {
                let user = inner
                    .users
                    .iter_mut()
                    .find(|u| u.id == user_id)
                    .expect("identity links an existing user");
                user.name = Some(identity.name.clone());
                user.updated_at = now;
                Ok(user.clone())
            }
            None => {
                let user = User::new(Some(identity.name.clone()));
                inner.identities.push(UserIdentity::new(
                    user.id,
                    provider,
                    &identity.subject,
                    &identity.email,
                ));
                inner.users.push(user.clone());
                Ok(user)
            }
        }
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn create(
        &self,
        user_id: UserId,
        email: &str,
        name: &str,
        ttl: Duration,
    ) -> Result<Session, AppError> {
        let session = Session::new(user_id, email, name, ttl);
        let mut inner = self.inner.lock().expect("lock store");
        inner.sessions.push(session.clone());
        Ok(session)
    }

    async fn resolve(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        let now = Utc::now();
        let inner = self.inner.lock().expect("lock store");
        Ok(inner
            .sessions
            .iter()
            .find(|s| s.id == session_id && !s.is_expired(now))
            .cloned())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("lock store");
        inner.sessions.retain(|s| s.id != session_id);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let now = Utc::now();
        let mut inner = self.inner.lock().expect("lock store");
        let before = inner.sessions.len();
        inner.sessions.retain(|s| !s.is_expired(now));
        Ok((before - inner.sessions.len()) as u64)
    }
}

#[async_trait]
impl ButtonRepository for InMemoryStore {
    async fn create(&self, user_id: UserId, title: &str, color: &str) -> Result<Button, AppError> {
        let button = Button::new(user_id, title, color);
        let mut inner = self.inner.lock().expect("lock store");
        inner.buttons.push(button.clone());
        Ok(button)
    }

    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, AppError> {
        let inner = self.inner.lock().expect("lock store");
        Ok(inner.buttons.iter().find(|b| b.id == id).cloned())
    }

    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Button>, AppError> {
        let inner = self.inner.lock().expect("lock store");
        let mut buttons: Vec<Button> = inner
            .buttons
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        buttons.sort_by_key(|b| (b.created_at, *b.id.as_uuid()));
        Ok(buttons)
    }

    async fn update(
        &self,
        id: ButtonId,
        title: &str,
        color: &str,
    ) -> Result<Option<Button>, AppError> {
        let mut inner = self.inner.lock().expect("lock store");
        Ok(inner.buttons.iter_mut().find(|b| b.id == id).map(|button| {
            button.title = title.to_string();
            button.color = color.to_string();
            button.updated_at = Utc::now();
            button.clone()
        }))
    }

    async fn delete(&self, id: ButtonId) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().expect("lock store");
        let before = inner.buttons.len();
        inner.buttons.retain(|b| b.id != id);
        let deleted = inner.buttons.len() < before;
        if deleted {
            inner.presses.retain(|p| p.button_id != id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl PressRepository for InMemoryStore {
    async fn record(&self, button_id: ButtonId) -> Result<Press, AppError> {
        let press = Press::new(button_id);
        let mut inner = self.inner.lock().expect("lock store");
        inner.presses.push(press.clone());
        Ok(press)
    }

    async fn list_between(
        &self,
        button_id: ButtonId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Press>, AppError> {
        let inner = self.inner.lock().expect("lock store");
        let mut presses: Vec<Press> = inner
            .presses
            .iter()
            .filter(|p| p.button_id == button_id && p.pressed_at >= start && p.pressed_at <= end)
            .cloned()
            .collect();
        presses.sort_by_key(|p| p.pressed_at);
        Ok(presses)
    }
}

/// Token verifier backed by a fixed token table, for driving the sign-in
/// flow without Google.
#[derive(Default)]
pub struct StaticVerifier {
    identities: HashMap<String, VerifiedIdentity>,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: &str, subject: &str, email: &str, name: &str) -> Self {
        self.identities.insert(
            token.to_string(),
            VerifiedIdentity {
                subject: subject.to_string(),
                email: email.to_string(),
                name: name.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl IdTokenVerifier for StaticVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, VerifyError> {
        self.identities
            .get(id_token)
            .cloned()
            .ok_or_else(|| VerifyError::Rejected("token not in test table".to_string()))
    }
}

/// Builds the production router over the in-memory store.
pub fn test_app(store: &Arc<InMemoryStore>, verifier: StaticVerifier) -> Router {
    let state = AppState::with_repositories(
        test_config(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(verifier),
    );
    router(state)
}

/// Builds the production router with no sign-in tokens registered.
pub fn test_app_without_tokens(store: &Arc<InMemoryStore>) -> Router {
    test_app(store, StaticVerifier::new())
}

pub fn request(method: &str, uri: &str) -> Builder {
    Request::builder().method(method).uri(uri)
}

pub fn session_cookie(session_id: &str) -> String {
    format!("session_id={}", session_id)
}

pub fn json_body(value: &Value) -> Body {
    Body::from(value.to_string())
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response body is json")
}

/// Pulls the `session_id` value out of the response `Set-Cookie` header.
pub fn set_cookie_session_id(response: &Response) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    raw.split(';')
        .next()?
        .trim()
        .strip_prefix("session_id=")
        .map(|v| v.to_string())
}

/// Full `Set-Cookie` header value, for attribute assertions.
pub fn set_cookie_header(response: &Response) -> Option<String> {
    Some(
        response
            .headers()
            .get(header::SET_COOKIE)?
            .to_str()
            .ok()?
            .to_string(),
    )
}
