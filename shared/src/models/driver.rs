//! Driver Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Driver status values stored in `drivers.status`
pub mod driver_status {
    pub const AVAILABLE: &str = "Available";
    pub const UNAVAILABLE: &str = "Unavailable";
}

/// Driver entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_name: String,
    pub status: String,
}

/// Create driver payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreate {
    #[validate(length(min = 1))]
    pub driver_name: String,
}

/// Driver status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatusUpdate {
    pub driver_name: String,
    /// "Available" or "Unavailable"
    pub status: String,
}
