use std::sync::Arc;

use crate::config::Config;
use crate::db::connection::DbPool;
use crate::repositories::{
    ButtonRepository, PgButtonRepository, PgPressRepository, PgSessionRepository,
    PgUserRepository, PressRepository, SessionRepository, UserRepository,
};
use crate::services::IdTokenVerifier;

/// Shared application state handed to every handler.
///
/// Repositories and the token verifier sit behind trait objects so tests can
/// swap in in-memory or mock implementations.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub buttons: Arc<dyn ButtonRepository>,
    pub presses: Arc<dyn PressRepository>,
    pub verifier: Arc<dyn IdTokenVerifier>,
}

impl AppState {
    /// Builds the production state with PostgreSQL-backed repositories.
    pub fn new(pool: DbPool, verifier: Arc<dyn IdTokenVerifier>, config: Config) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepository::new(pool.clone())),
            sessions: Arc::new(PgSessionRepository::new(pool.clone())),
            buttons: Arc::new(PgButtonRepository::new(pool.clone())),
            presses: Arc::new(PgPressRepository::new(pool)),
            verifier,
        }
    }

    /// Builds state from explicit repository implementations.
    pub fn with_repositories(
        config: Config,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        buttons: Arc<dyn ButtonRepository>,
        presses: Arc<dyn PressRepository>,
        verifier: Arc<dyn IdTokenVerifier>,
    ) -> Self {
        Self {
            config,
            users,
            sessions,
            buttons,
            presses,
            verifier,
        }
    }
}
