//! Aggregated press statistics.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::AppError,
    models::press::{ButtonPressData, ButtonPressStatsResponse, StatsResponse},
    models::session::CurrentUser,
    state::AppState,
    utils::time::resolve_window,
};

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// GET /api/stats
///
/// Returns one entry per owned button, buttons with no presses included,
/// with each press bucketed by UTC date and hour. The window defaults to
/// the 30 days ending now; explicit RFC 3339 bounds are inclusive.
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let (start, end) = resolve_window(query.start.as_deref(), query.end.as_deref(), Utc::now());

    let buttons = state.buttons.list_by_owner(user.id).await?;

    let mut button_stats = Vec::with_capacity(buttons.len());
    for button in buttons {
        let presses = state.presses.list_between(button.id, start, end).await?;

        button_stats.push(ButtonPressStatsResponse {
            button_id: button.id,
            button_title: button.title,
            button_color: button.color,
            presses: presses.iter().map(ButtonPressData::from_press).collect(),
        });
    }

    Ok(Json(StatsResponse { button_stats }))
}
