//! Restaurant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validate::validate_phone;

/// Approval status values stored in `restaurants.approval_status`
pub mod approval {
    pub const PENDING: &str = "Pending";
    pub const APPROVED: &str = "Approved";
    pub const REJECTED: &str = "Rejected";
}

/// Withdrawal status values stored in `restaurants.withdrawal_status`
pub mod withdrawal {
    pub const REQUESTED: &str = "Requested";
    pub const APPROVED: &str = "Approved";
    pub const DENIED: &str = "Denied";
}

/// Restaurant entity (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub rest_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub approval_status: String,
    pub withdrawal_status: Option<String>,
    pub is_active: bool,
}

/// Pending registration joined with its address, for admin review
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PendingRegistration {
    pub rest_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub street_address1: String,
    pub street_address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
}

/// Registration payload: restaurant, contact, and address details
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRegistration {
    #[validate(length(min = 1))]
    pub rest_name: String,
    #[validate(length(min = 1))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(custom(function = validate_phone))]
    pub contact_phone: String,
    #[validate(length(min = 1))]
    pub street_address1: String,
    pub street_address2: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub zip: Option<String>,
}

/// Admin decision on a pending registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub rest_name: String,
    /// "Approved" or "Rejected"
    pub decision: String,
}

/// Admin decision on a withdrawal request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDecision {
    pub rest_name: String,
    /// "Approved" or "Denied"
    pub decision: String,
}
