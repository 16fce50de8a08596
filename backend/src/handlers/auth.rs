use std::time::Duration as StdDuration;

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use chrono::Duration;
use serde_json::json;

use crate::{
    config::Config,
    error::AppError,
    models::session::CurrentUser,
    models::user::{AuthRequest, UserInfoResponse},
    services::GOOGLE_PROVIDER,
    state::AppState,
    utils::cookies::{
        build_clear_session_cookie, build_session_cookie, extract_cookie_value, CookieOptions,
        SameSite, SESSION_COOKIE_NAME,
    },
};

fn cookie_options(config: &Config) -> CookieOptions {
    CookieOptions {
        secure: config.cookie_secure,
        same_site: SameSite::Strict,
    }
}

/// POST /api/auth
///
/// Verifies the provider ID token, finds or creates the matching user, and
/// opens a session. Every verification failure collapses into the same 401
/// so callers learn nothing about which check rejected the token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid request".to_string()))?;

    let identity = match state.verifier.verify(&payload.id_token).await {
        Ok(identity) => identity,
        Err(err) => {
            tracing::debug!(error = %err, "Sign-in token verification failed");
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }
    };

    let user = state
        .users
        .find_or_create(GOOGLE_PROVIDER, &identity)
        .await?;

    let days = state.config.session_expiration_days;
    let session = state
        .sessions
        .create(user.id, &identity.email, &identity.name, Duration::days(days as i64))
        .await?;

    tracing::info!(user_id = %user.id, "User signed in");

    let cookie = build_session_cookie(
        &session.id,
        StdDuration::from_secs(days * 24 * 60 * 60),
        cookie_options(&state.config),
    );

    let body = UserInfoResponse {
        id: user.id,
        email: identity.email,
        name: identity.name,
    };

    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Json(body)))
}

/// POST /api/logout
///
/// Destroys the session named by the cookie, if any, and clears the cookie.
/// Responds 200 whether or not a session existed.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let session_id = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME));

    if let Some(session_id) = session_id {
        state.sessions.destroy(&session_id).await?;
    }

    let cookie = build_clear_session_cookie(cookie_options(&state.config));

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(json!({ "message": "Logged out" })),
    ))
}

/// GET /api/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfoResponse> {
    Json(UserInfoResponse {
        id: user.id,
        email: user.email,
        name: user.name,
    })
}
