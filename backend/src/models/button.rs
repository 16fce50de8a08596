//! Models for habit buttons and their request/response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

use crate::types::{ButtonId, UserId};
use crate::validation::validate_button_fields;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
/// Database representation of a habit button.
pub struct Button {
    /// Unique identifier for the button.
    pub id: ButtonId,
    /// Owning user; immutable after creation.
    pub user_id: UserId,
    /// Display title, at most 100 characters.
    pub title: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Button {
    /// Constructs a new button with a freshly generated identifier.
    pub fn new(user_id: UserId, title: &str, color: &str) -> Self {
        let now = Utc::now();
        Self {
            id: ButtonId::new(),
            user_id,
            title: title.to_string(),
            color: color.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
/// Payload for creating a new button.
pub struct CreateButtonRequest {
    pub title: String,
    pub color: String,
}

impl Validate for CreateButtonRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_button_fields(&self.title, &self.color)
    }
}

#[derive(Debug, Serialize, Deserialize)]
/// Payload for replacing a button's title and color.
pub struct UpdateButtonRequest {
    pub title: String,
    pub color: String,
}

impl Validate for UpdateButtonRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_button_fields(&self.title, &self.color)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Public-facing representation of a button returned by the API.
pub struct ButtonResponse {
    pub id: ButtonId,
    pub user_id: UserId,
    pub title: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Button> for ButtonResponse {
    fn from(button: Button) -> Self {
        ButtonResponse {
            id: button.id,
            user_id: button.user_id,
            title: button.title,
            color: button.color,
            created_at: button.created_at,
            updated_at: button.updated_at,
        }
    }
}
