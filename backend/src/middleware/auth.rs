use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::session::CurrentUser,
    state::AppState,
    utils::cookies::{extract_cookie_value, SESSION_COOKIE_NAME},
};

/// Requires a live session cookie on the request.
///
/// Resolves the cookie against the session store and attaches the caller as
/// [`CurrentUser`] to request extensions. Requests without a cookie, or with
/// an unknown or expired session id, are rejected before any handler runs.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session_id = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
        .ok_or_else(|| AppError::Unauthorized("No valid session".to_string()))?;

    let session = state
        .sessions
        .resolve(&session_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("No valid session".to_string()))?;

    request.extensions_mut().insert(CurrentUser::from(session));

    Ok(next.run(request).await)
}
