//! Models for recorded button presses and the aggregated stats payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{ButtonId, PressId};
use crate::utils::time::{format_utc_rfc3339, utc_date_string, utc_hour};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
/// Database representation of a single button press event.
pub struct Press {
    /// Unique identifier for the press.
    pub id: PressId,
    /// The button that was pressed.
    pub button_id: ButtonId,
    /// Instant the press was recorded, in UTC.
    pub pressed_at: DateTime<Utc>,
}

impl Press {
    /// Constructs a press recorded at the current instant.
    pub fn new(button_id: ButtonId) -> Self {
        Self {
            id: PressId::new(),
            button_id,
            pressed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One press bucketed for display: UTC calendar date, hour of day, and the
/// exact instant.
pub struct ButtonPressData {
    /// `YYYY-MM-DD` in UTC.
    pub date: String,
    /// Hour of day in UTC, 0-23.
    pub hour: u32,
    /// RFC 3339 instant of the press.
    pub pressed_at: String,
}

impl ButtonPressData {
    pub fn from_press(press: &Press) -> Self {
        ButtonPressData {
            date: utc_date_string(press.pressed_at),
            hour: utc_hour(press.pressed_at),
            pressed_at: format_utc_rfc3339(press.pressed_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Press history for one button inside the requested window.
pub struct ButtonPressStatsResponse {
    pub button_id: ButtonId,
    pub button_title: String,
    pub button_color: String,
    pub presses: Vec<ButtonPressData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Stats payload covering every button the caller owns.
pub struct StatsResponse {
    pub button_stats: Vec<ButtonPressStatsResponse>,
}
