//! Authentication payloads

use serde::{Deserialize, Serialize};

/// User type values accepted by change-password
pub mod user_type {
    pub const STAFF: &str = "staff";
    pub const RESTAURANT: &str = "restaurant";
}

/// Login payload (staff and restaurant)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub role: String,
    pub message: String,
    pub must_change_password: bool,
}

/// Password rotation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
    /// "staff" or "restaurant"
    pub user_type: String,
}
