//! User accounts keyed by external sign-in identities.

use async_trait::async_trait;
use chrono::Utc;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::identity::{UserIdentity, VerifiedIdentity};
use crate::models::user::User;

/// Repository for resolving verified external identities to local users.
///
/// Use `MockUserRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds the user linked to `(provider, identity.subject)`, creating the
    /// user and the identity link on first sign-in. Stored email and display
    /// name are refreshed from the token on every call.
    async fn find_or_create(
        &self,
        provider: &str,
        identity: &VerifiedIdentity,
    ) -> Result<User, AppError>;
}

/// PostgreSQL-backed implementation of [`UserRepository`].
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_or_create(
        &self,
        provider: &str,
        identity: &VerifiedIdentity,
    ) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, UserIdentity>(
            r#"
            SELECT id, user_id, provider, provider_user_id, email, created_at, updated_at
            FROM user_identities
            WHERE provider = $1 AND provider_user_id = $2
            "#,
        )
        .bind(provider)
        .bind(&identity.subject)
        .fetch_optional(&mut *tx)
        .await?;

        let user = match existing {
            Some(link) => {
                let now = Utc::now();
                sqlx::query(
                    r#"
                    UPDATE user_identities
                    SET email = $1, updated_at = $2
                    WHERE id = $3
                    "#,
                )
                .bind(&identity.email)
                .bind(now)
                .bind(link.id)
                .execute(&mut *tx)
                .await?;

                sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET name = $1, updated_at = $2
                    WHERE id = $3
                    RETURNING id, name, created_at, updated_at
                    "#,
                )
                .bind(&identity.name)
                .bind(now)
                .bind(link.user_id)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                let user = User::new(Some(identity.name.clone()));
                sqlx::query(
                    r#"
                    INSERT INTO users (id, name, created_at, updated_at)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(user.id)
                .bind(&user.name)
                .bind(user.created_at)
                .bind(user.updated_at)
                .execute(&mut *tx)
                .await?;

                let link =
                    UserIdentity::new(user.id, provider, &identity.subject, &identity.email);
                sqlx::query(
                    r#"
                    INSERT INTO user_identities
                        (id, user_id, provider, provider_user_id, email, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(link.id)
                .bind(link.user_id)
                .bind(&link.provider)
                .bind(&link.provider_user_id)
                .bind(&link.email)
                .bind(link.created_at)
                .bind(link.updated_at)
                .execute(&mut *tx)
                .await?;

                user
            }
        };

        tx.commit().await?;
        Ok(user)
    }
}
