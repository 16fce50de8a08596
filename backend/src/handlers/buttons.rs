//! CRUD endpoints for habit buttons.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::AppError,
    models::button::{Button, ButtonResponse, CreateButtonRequest, UpdateButtonRequest},
    models::session::CurrentUser,
    state::AppState,
    types::ButtonId,
    validation::Validate,
};

pub(crate) fn parse_button_id(raw: &str) -> Result<ButtonId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid button ID format".to_string()))
}

/// Loads the button at `raw_id` and checks that `user` owns it.
///
/// Shared by every route that addresses a single button, so the error
/// ordering is identical everywhere: malformed id 400, unknown id 404,
/// foreign owner 403.
pub(crate) async fn find_owned_button(
    state: &AppState,
    user: &CurrentUser,
    raw_id: &str,
) -> Result<Button, AppError> {
    let id = parse_button_id(raw_id)?;

    let button = state
        .buttons
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Button not found".to_string()))?;

    if button.user_id != user.id {
        return Err(AppError::Forbidden("Forbidden".to_string()));
    }

    Ok(button)
}

/// POST /api/buttons
pub async fn create_button(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    payload: Result<Json<CreateButtonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ButtonResponse>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Invalid request".to_string()))?;
    payload.validate()?;

    let button = state
        .buttons
        .create(user.id, &payload.title, &payload.color)
        .await?;

    tracing::info!(user_id = %user.id, button_id = %button.id, "Button created");

    Ok((StatusCode::CREATED, Json(ButtonResponse::from(button))))
}

/// GET /api/buttons
pub async fn list_buttons(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<ButtonResponse>>, AppError> {
    let buttons = state.buttons.list_by_owner(user.id).await?;

    Ok(Json(
        buttons.into_iter().map(ButtonResponse::from).collect(),
    ))
}

/// GET /api/buttons/{id}
pub async fn get_button(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ButtonResponse>, AppError> {
    let button = find_owned_button(&state, &user, &id).await?;

    Ok(Json(ButtonResponse::from(button)))
}

/// PUT /api/buttons/{id}
pub async fn update_button(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateButtonRequest>, JsonRejection>,
) -> Result<Json<ButtonResponse>, AppError> {
    // Ownership is settled before the body is even looked at, so probing a
    // foreign button with a broken payload still yields 403.
    let button = find_owned_button(&state, &user, &id).await?;

    let Json(payload) = payload.map_err(|_| AppError::BadRequest("Invalid request".to_string()))?;
    payload.validate()?;

    let updated = state
        .buttons
        .update(button.id, &payload.title, &payload.color)
        .await?
        .ok_or_else(|| AppError::NotFound("Button not found".to_string()))?;

    tracing::info!(user_id = %user.id, button_id = %updated.id, "Button updated");

    Ok(Json(ButtonResponse::from(updated)))
}

/// DELETE /api/buttons/{id}
pub async fn delete_button(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let button = find_owned_button(&state, &user, &id).await?;

    let deleted = state.buttons.delete(button.id).await?;
    if !deleted {
        return Err(AppError::NotFound("Button not found".to_string()));
    }

    tracing::info!(user_id = %user.id, button_id = %button.id, "Button deleted");

    Ok(StatusCode::NO_CONTENT)
}
