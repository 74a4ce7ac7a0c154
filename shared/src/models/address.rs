//! Address Model

use serde::{Deserialize, Serialize};

/// Address entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: i64,
    pub street_address1: String,
    pub street_address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
}
