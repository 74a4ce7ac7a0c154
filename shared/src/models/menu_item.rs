//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu item entity
///
/// Price is a 2-decimal currency amount; the REAL column value is exact
/// for such amounts and converted to `Decimal` at the pricing boundary.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: i64,
    pub rest_name: String,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_price: f64,
    pub is_available: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[validate(length(min = 1))]
    pub rest_name: String,
    #[validate(length(min = 1))]
    pub item_name: String,
    pub item_description: Option<String>,
    #[validate(range(min = 0.0))]
    pub item_price: f64,
    pub is_available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub item_id: i64,
    #[validate(length(min = 1))]
    pub rest_name: String,
    pub item_name: Option<String>,
    pub item_description: Option<String>,
    #[validate(range(min = 0.0))]
    pub item_price: Option<f64>,
    pub is_available: Option<bool>,
}

/// Delete menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDelete {
    pub item_id: i64,
    pub rest_name: String,
}
