//! Models for server-side login sessions resolved from the session cookie.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
/// Database representation of a login session.
///
/// The `id` is the opaque value stored in the session cookie. Email and name
/// are denormalized from the sign-in so authenticated requests resolve
/// without touching the users table.
pub struct Session {
    /// Opaque session identifier held by the client cookie.
    pub id: String,
    /// The user this session authenticates.
    pub user_id: UserId,
    /// Email captured at sign-in time.
    pub email: String,
    /// Display name captured at sign-in time.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Instant after which the session no longer authenticates.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Constructs a new session with a random opaque identifier.
    pub fn new(user_id: UserId, email: &str, name: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            email: email.to_string(),
            name: name.to_string(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Returns `true` when the session no longer authenticates at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
/// Per-request identity of the authenticated caller, attached to request
/// extensions by the session middleware.
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

impl From<Session> for CurrentUser {
    fn from(session: Session) -> Self {
        CurrentUser {
            id: session.user_id,
            email: session.email,
            name: session.name,
        }
    }
}
