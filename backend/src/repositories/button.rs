//! Habit button storage.

use async_trait::async_trait;
use chrono::Utc;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::button::Button;
use crate::types::{ButtonId, UserId};

/// Repository for habit buttons.
///
/// Ownership checks are the caller's job; these operations address rows by
/// id alone. Use `MockButtonRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ButtonRepository: Send + Sync {
    /// Inserts a new button owned by `user_id`.
    async fn create(&self, user_id: UserId, title: &str, color: &str)
        -> Result<Button, AppError>;

    /// Finds a button by id.
    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, AppError>;

    /// Lists every button owned by `user_id`, oldest first.
    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Button>, AppError>;

    /// Replaces title and color, bumping `updated_at`. Returns `None` when
    /// the button does not exist.
    async fn update(
        &self,
        id: ButtonId,
        title: &str,
        color: &str,
    ) -> Result<Option<Button>, AppError>;

    /// Deletes a button and, through the schema, its recorded presses.
    /// Returns `false` when the button did not exist.
    async fn delete(&self, id: ButtonId) -> Result<bool, AppError>;
}

/// PostgreSQL-backed implementation of [`ButtonRepository`].
pub struct PgButtonRepository {
    pool: DbPool,
}

impl PgButtonRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ButtonRepository for PgButtonRepository {
    async fn create(
        &self,
        user_id: UserId,
        title: &str,
        color: &str,
    ) -> Result<Button, AppError> {
        let button = Button::new(user_id, title, color);

        sqlx::query(
            r#"
            INSERT INTO buttons (id, user_id, title, color, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(button.id)
        .bind(button.user_id)
        .bind(&button.title)
        .bind(&button.color)
        .bind(button.created_at)
        .bind(button.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(button)
    }

    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, AppError> {
        let button = sqlx::query_as::<_, Button>(
            r#"
            SELECT id, user_id, title, color, created_at, updated_at
            FROM buttons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(button)
    }

    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<Button>, AppError> {
        let buttons = sqlx::query_as::<_, Button>(
            r#"
            SELECT id, user_id, title, color, created_at, updated_at
            FROM buttons
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(buttons)
    }

    async fn update(
        &self,
        id: ButtonId,
        title: &str,
        color: &str,
    ) -> Result<Option<Button>, AppError> {
        let button = sqlx::query_as::<_, Button>(
            r#"
            UPDATE buttons
            SET title = $1, color = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, user_id, title, color, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(color)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(button)
    }

    async fn delete(&self, id: ButtonId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM buttons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
