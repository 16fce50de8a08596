//! Press recording endpoint.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppError, handlers::buttons::find_owned_button, models::session::CurrentUser,
    state::AppState,
};

/// POST /api/press/{id}
pub async fn press_button(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let button = find_owned_button(&state, &user, &id).await?;

    let press = state.presses.record(button.id).await?;

    tracing::info!(
        user_id = %user.id,
        button_id = %button.id,
        press_id = %press.id,
        "Button pressed"
    );

    Ok(Json(json!({ "message": "Button pressed successfully" })))
}
