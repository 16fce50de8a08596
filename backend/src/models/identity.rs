//! Models linking local user accounts to external sign-in identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{IdentityId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
/// Database representation of one external identity linked to a user.
///
/// A user is found on sign-in by the `(provider, provider_user_id)` pair,
/// which is unique across the table.
pub struct UserIdentity {
    /// Unique identifier for the identity link.
    pub id: IdentityId,
    /// The local user this identity resolves to.
    pub user_id: UserId,
    /// Identity provider tag, e.g. `google`.
    pub provider: String,
    /// Stable subject identifier issued by the provider.
    pub provider_user_id: String,
    /// Email as reported by the provider on last sign-in.
    pub email: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Constructs a new identity link with a freshly generated identifier.
    pub fn new(user_id: UserId, provider: &str, provider_user_id: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: IdentityId::new(),
            user_id,
            provider: provider.to_string(),
            provider_user_id: provider_user_id.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Identity claims extracted from a successfully verified provider token.
pub struct VerifiedIdentity {
    /// Stable subject identifier (`sub` claim).
    pub subject: String,
    /// Email address asserted by the provider.
    pub email: String,
    /// Display name; empty when the provider omits it.
    pub name: String,
}
