pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod types;
pub mod utils;
pub mod validation;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Builds the application route table.
///
/// Session enforcement is a route layer on the protected set only;
/// `POST /api/auth` and `POST /api/logout` stay reachable without a cookie.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout));

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route(
            "/api/buttons",
            get(handlers::buttons::list_buttons).post(handlers::buttons::create_button),
        )
        .route(
            "/api/buttons/{id}",
            get(handlers::buttons::get_button)
                .put(handlers::buttons::update_button)
                .delete(handlers::buttons::delete_button),
        )
        .route("/api/press/{id}", post(handlers::press::press_button))
        .route("/api/stats", get(handlers::stats::get_stats))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
