//! Restaurant self-service endpoints: registration, withdrawal, menu, hours

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    BusinessHours, DAYS_OF_WEEK, HoursUpdate, MenuItem, MenuItemCreate, MenuItemDelete,
    MenuItemUpdate, RestaurantRegistration,
};
use validator::Validate;

use crate::db;
use crate::state::AppState;

use super::ApiResult;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestNameQuery {
    pub rest_name: String,
}

/// POST /api/restaurant/registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RestaurantRegistration>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if db::restaurants::exists(&state.pool, &req.rest_name).await? {
        return Err(AppError::new(ErrorCode::RestaurantNameExists).into());
    }

    let now = shared::util::now_millis();
    db::restaurants::register(&state.pool, &req, now).await?;

    tracing::info!(rest_name = %req.rest_name, "Registration submitted");
    Ok(Json(serde_json::json!({
        "message": "Registration submitted for approval"
    })))
}

/// POST /api/restaurant/withdrawal?restName=
pub async fn request_withdrawal(
    State(state): State<AppState>,
    Query(query): Query<RestNameQuery>,
) -> ApiResult<serde_json::Value> {
    let updated = db::restaurants::request_withdrawal(&state.pool, &query.rest_name).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }
    Ok(Json(
        serde_json::json!({ "message": "Withdrawal requested" }),
    ))
}

/// GET /api/restaurant/menu?restName=
pub async fn get_menu(
    State(state): State<AppState>,
    Query(query): Query<RestNameQuery>,
) -> ApiResult<Vec<MenuItem>> {
    if !db::restaurants::exists(&state.pool, &query.rest_name).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }
    let rows = db::menu::list(&state.pool, &query.rest_name).await?;
    Ok(Json(rows))
}

/// POST /api/restaurant/menu-item
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(req): Json<MenuItemCreate>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if !db::restaurants::exists(&state.pool, &req.rest_name).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }

    let item_id = db::menu::create_item(&state.pool, &req).await?;
    Ok(Json(serde_json::json!({
        "message": "Menu item created",
        "itemId": item_id,
    })))
}

/// PUT /api/restaurant/menu-item
pub async fn update_menu_item(
    State(state): State<AppState>,
    Json(req): Json<MenuItemUpdate>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = db::menu::update_item(&state.pool, &req).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::MenuItemNotFound).into());
    }
    Ok(Json(serde_json::json!({ "message": "Menu item updated" })))
}

/// DELETE /api/restaurant/menu-item
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Json(req): Json<MenuItemDelete>,
) -> ApiResult<serde_json::Value> {
    let deleted = db::menu::delete_item(&state.pool, &req.rest_name, req.item_id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::MenuItemNotFound).into());
    }
    Ok(Json(serde_json::json!({ "message": "Menu item deleted" })))
}

/// GET /api/restaurant/hours?restName=
pub async fn get_hours(
    State(state): State<AppState>,
    Query(query): Query<RestNameQuery>,
) -> ApiResult<Vec<BusinessHours>> {
    let rows = db::hours::list(&state.pool, &query.rest_name).await?;
    Ok(Json(rows))
}

/// PUT /api/restaurant/hours
pub async fn update_hours(
    State(state): State<AppState>,
    Json(req): Json<HoursUpdate>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if !DAYS_OF_WEEK.contains(&req.day_of_week.as_str()) {
        return Err(AppError::with_message(
            ErrorCode::HoursInvalidDay,
            format!("Unknown day of week: '{}'", req.day_of_week),
        )
        .into());
    }
    if !db::restaurants::exists(&state.pool, &req.rest_name).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
    }

    db::hours::upsert(&state.pool, &req).await?;
    Ok(Json(
        serde_json::json!({ "message": "Business hours updated" }),
    ))
}
