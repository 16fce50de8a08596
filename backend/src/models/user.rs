//! Models that represent user accounts and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
/// Database representation of a user account.
///
/// Accounts carry no credentials of their own; sign-in happens through a
/// linked external identity.
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,
    /// Display name as reported by the identity provider on last sign-in.
    pub name: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Constructs a new user with a freshly generated identifier.
    pub fn new(name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sign-in payload carrying the provider-issued ID token.
pub struct AuthRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Public-facing identity of the signed-in user.
pub struct UserInfoResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
}
