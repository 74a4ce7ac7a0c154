//! Order endpoints: creation with pricing, delivery assignment, lookup

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    AssignDriverRequest, DeliveryTimeRequest, Order, OrderCreate, OrderCreated, OrderSummary,
    driver_status,
};
use std::collections::HashSet;
use validator::Validate;

use crate::db;
use crate::pricing::{self, OrderLine, PricingError};
use crate::state::AppState;

use super::ApiResult;

/// POST /api/orders
///
/// Prices the order against a snapshot of the restaurant's menu taken here,
/// then persists everything in one transaction. Any item id not on the menu
/// rejects the whole order with no rows written.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<OrderCreate>,
) -> ApiResult<OrderCreated> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let tip = match req.tip_amount {
        Some(value) => Some(pricing::currency_decimal(value).ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidTip, "Tip amount is not a valid number")
        })?),
        None => None,
    };

    // Snapshot covers the distinct requested ids, scoped to the restaurant
    let mut distinct_ids = Vec::new();
    let mut seen = HashSet::new();
    for item in &req.items {
        if seen.insert(item.item_id) {
            distinct_ids.push(item.item_id);
        }
    }
    let snapshot = db::menu::price_snapshot(&state.pool, &req.rest_name, &distinct_ids).await?;

    let lines: Vec<OrderLine> = req
        .items
        .iter()
        .map(|item| OrderLine {
            item_id: item.item_id,
            quantity: item.quantity,
        })
        .collect();

    let totals = pricing::price_order(&snapshot, &lines, tip).map_err(pricing_error)?;

    let order_number = db::orders::create(&state.pool, &req.rest_name, &totals, &req.delivery)
        .await?;
    tracing::info!(
        order_number,
        rest_name = %req.rest_name,
        grand_total = %totals.grand_total,
        "Order created"
    );

    Ok(Json(OrderCreated {
        order_number,
        subtotal: pricing::currency_f64(totals.subtotal),
        service_charge: pricing::currency_f64(totals.service_charge),
        tip_amount: pricing::currency_f64(totals.tip),
        grand_total: pricing::currency_f64(totals.grand_total),
        message: "Order created".into(),
    }))
}

/// Map pricing failures onto API error codes (all HTTP 400)
fn pricing_error(err: PricingError) -> crate::error::ServiceError {
    let app_error = match err {
        PricingError::EmptyOrder => AppError::new(ErrorCode::OrderEmpty),
        PricingError::InvalidQuantity { item_id } => AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("Quantity must be at least 1 for item {item_id}"),
        )
        .with_detail("itemId", item_id),
        PricingError::NegativeTip => AppError::new(ErrorCode::InvalidTip),
        PricingError::InvalidItems { missing } => AppError::with_message(
            ErrorCode::InvalidOrderItem,
            "One or more items are not on the restaurant menu",
        )
        .with_detail("missingItemIds", missing),
    };
    app_error.into()
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<Order>> {
    let rows = db::orders::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/orders/{order_number}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_number): Path<i64>,
) -> ApiResult<OrderSummary> {
    let order = db::orders::find(&state.pool, order_number)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    let items = db::orders::list_items(&state.pool, order_number).await?;
    let delivery = db::orders::delivery_address(&state.pool, order_number).await?;

    Ok(Json(OrderSummary {
        order,
        items,
        delivery,
    }))
}

/// POST /api/orders/{order_number}/assign-driver
pub async fn assign_driver(
    State(state): State<AppState>,
    Path(order_number): Path<i64>,
    Json(req): Json<AssignDriverRequest>,
) -> ApiResult<serde_json::Value> {
    let driver = db::drivers::find(&state.pool, &req.driver_name)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DriverNotFound))?;
    if driver.status != driver_status::AVAILABLE {
        return Err(AppError::new(ErrorCode::DriverNotAvailable).into());
    }

    let updated = db::orders::assign_driver(&state.pool, order_number, &req.driver_name).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::OrderNotFound).into());
    }
    Ok(Json(serde_json::json!({ "message": "Driver assigned" })))
}

/// POST /api/orders/{order_number}/delivery
pub async fn set_delivery(
    State(state): State<AppState>,
    Path(order_number): Path<i64>,
    Json(req): Json<DeliveryTimeRequest>,
) -> ApiResult<serde_json::Value> {
    let updated = db::orders::set_delivered(&state.pool, order_number, req.date, req.time).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::OrderNotFound).into());
    }
    Ok(Json(
        serde_json::json!({ "message": "Order marked delivered" }),
    ))
}
