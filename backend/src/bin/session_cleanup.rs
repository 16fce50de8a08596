use buttontrack_backend::{
    config::Config,
    db::connection::create_pool,
    repositories::session::{PgSessionRepository, SessionRepository},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buttontrack_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;

    let sessions = PgSessionRepository::new(pool.clone());
    let deleted = sessions
        .delete_expired()
        .await
        .map_err(|e| anyhow::anyhow!("failed to delete expired sessions: {:?}", e))?;
    if deleted > 0 {
        tracing::info!("Deleted {} expired sessions", deleted);
    }

    sqlx::query("VACUUM (ANALYZE) sessions").execute(&pool).await?;

    Ok(())
}
