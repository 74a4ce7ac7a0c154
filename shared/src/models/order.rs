//! Order Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validate::validate_phone;

/// Order status values stored in `orders.order_status`
pub mod order_status {
    pub const IN_PROGRESS: &str = "In Progress";
    pub const OUT_FOR_DELIVERY: &str = "Out for Delivery";
    pub const DELIVERED: &str = "Delivered";
}

/// Order header row
///
/// Totals are derived once at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: i64,
    pub rest_name: String,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub subtotal_amount: f64,
    pub service_charge: f64,
    pub tip_amount: f64,
    pub grand_total: f64,
    pub order_status: String,
    pub driver_name: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_time: Option<NaiveTime>,
}

/// Order line joined with its menu item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    pub item_id: i64,
    pub item_name: String,
    pub item_price: f64,
    pub quantity: i64,
    pub line_subtotal: f64,
}

/// Delivery address attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street_address1: String,
    pub street_address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
}

/// Full order detail: header + lines + delivery address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
    pub delivery: Option<DeliveryAddress>,
}

/// One requested order line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub item_id: i64,
    #[validate(range(min = 1))]
    pub quantity: i64,
}

/// Delivery details captured with an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    #[validate(length(min = 1))]
    pub street_address1: String,
    pub street_address2: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub zip: Option<String>,
    #[validate(length(min = 1))]
    pub contact_name: String,
    #[validate(custom(function = validate_phone))]
    pub contact_phone: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[validate(length(min = 1))]
    pub rest_name: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItemRequest>,
    #[validate(nested)]
    pub delivery: DeliveryDetails,
    pub tip_amount: Option<f64>,
}

/// Create order response: the priced totals plus the generated order number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order_number: i64,
    pub subtotal: f64,
    pub service_charge: f64,
    pub tip_amount: f64,
    pub grand_total: f64,
    pub message: String,
}

/// Driver assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub driver_name: String,
}

/// Delivery completion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTimeRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
}
