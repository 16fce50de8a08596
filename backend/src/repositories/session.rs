//! Server-side login sessions backing the session cookie.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::session::Session;
use crate::types::UserId;

/// Repository for opaque login sessions.
///
/// Use `MockSessionRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a session for `user_id` expiring `ttl` from now and returns
    /// it, id included.
    async fn create(
        &self,
        user_id: UserId,
        email: &str,
        name: &str,
        ttl: Duration,
    ) -> Result<Session, AppError>;

    /// Resolves a session id to its record. Expired or unknown ids resolve
    /// to `None`.
    async fn resolve(&self, session_id: &str) -> Result<Option<Session>, AppError>;

    /// Deletes a session. Unknown ids are a no-op.
    async fn destroy(&self, session_id: &str) -> Result<(), AppError>;

    /// Deletes every expired session and returns how many were removed.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}

/// PostgreSQL-backed implementation of [`SessionRepository`].
pub struct PgSessionRepository {
    pool: DbPool,
}

impl PgSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(
        &self,
        user_id: UserId,
        email: &str,
        name: &str,
        ttl: Duration,
    ) -> Result<Session, AppError> {
        let session = Session::new(user_id, email, name, ttl);

        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, email, name, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&session.id)
        .bind(session.user_id)
        .bind(&session.email)
        .bind(&session.name)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(session)
    }

    async fn resolve(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, email, name, created_at, expires_at
            FROM sessions
            WHERE id = $1 AND expires_at > $2
            "#,
        )
        .bind(session_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    async fn destroy(&self, session_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
