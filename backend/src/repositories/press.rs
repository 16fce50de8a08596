//! Button press event storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::press::Press;
use crate::types::ButtonId;

/// Repository for button press events.
///
/// Use `MockPressRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PressRepository: Send + Sync {
    /// Records a press of `button_id` at the current instant.
    async fn record(&self, button_id: ButtonId) -> Result<Press, AppError>;

    /// Lists presses of `button_id` inside the inclusive `[start, end]`
    /// window, oldest first.
    async fn list_between(
        &self,
        button_id: ButtonId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Press>, AppError>;
}

/// PostgreSQL-backed implementation of [`PressRepository`].
pub struct PgPressRepository {
    pool: DbPool,
}

impl PgPressRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PressRepository for PgPressRepository {
    async fn record(&self, button_id: ButtonId) -> Result<Press, AppError> {
        let press = Press::new(button_id);

        sqlx::query(
            r#"
            INSERT INTO button_presses (id, button_id, pressed_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(press.id)
        .bind(press.button_id)
        .bind(press.pressed_at)
        .execute(&self.pool)
        .await?;

        Ok(press)
    }

    async fn list_between(
        &self,
        button_id: ButtonId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Press>, AppError> {
        let presses = sqlx::query_as::<_, Press>(
            r#"
            SELECT id, button_id, pressed_at
            FROM button_presses
            WHERE button_id = $1 AND pressed_at >= $2 AND pressed_at <= $3
            ORDER BY pressed_at ASC
            "#,
        )
        .bind(button_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(presses)
    }
}
