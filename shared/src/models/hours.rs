//! Business Hours Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Recognized day-of-week values, Monday first
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One row per (restaurant, day); times are "HH:MM" strings
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub rest_name: String,
    pub day_of_week: String,
    pub open_time: String,
    pub close_time: String,
    pub is_closed: bool,
}

/// Per-day hours upsert payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HoursUpdate {
    #[validate(length(min = 1))]
    pub rest_name: String,
    pub day_of_week: String,
    #[validate(length(min = 1))]
    pub open_time: String,
    #[validate(length(min = 1))]
    pub close_time: String,
    pub is_closed: Option<bool>,
}
