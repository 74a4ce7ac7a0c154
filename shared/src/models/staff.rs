//! Staff Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff status values stored in `staff.status`
pub mod staff_status {
    pub const ACTIVE: &str = "Active";
    pub const INACTIVE: &str = "Inactive";
}

/// Staff response (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
}

/// Create staff payload
///
/// A password starting with `temp-` marks the account as requiring a
/// password change on first login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}

/// Staff status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffStatusUpdate {
    pub username: String,
    /// "Active" or "Inactive"
    pub status: String,
}
