//! Admin endpoints: registration review, staff and driver management

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::restaurant::{approval, withdrawal};
use shared::models::{
    ApprovalRequest, Driver, DriverCreate, DriverStatusUpdate, PendingRegistration, Restaurant,
    Staff, StaffCreate, StaffStatusUpdate, WithdrawalDecision, driver_status, staff_status,
};
use validator::Validate;

use crate::db;
use crate::state::AppState;
use crate::util::{generate_temp_password, hash_password, is_temp_password};

use super::ApiResult;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListQuery {
    #[serde(default)]
    pub include_pending: bool,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/admin/restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantListQuery>,
) -> ApiResult<Vec<Restaurant>> {
    let rows = db::restaurants::list(&state.pool, query.include_pending, query.include_inactive)
        .await?;
    Ok(Json(rows))
}

/// GET /api/admin/restaurants/pending
pub async fn pending_registrations(
    State(state): State<AppState>,
) -> ApiResult<Vec<PendingRegistration>> {
    let rows = db::restaurants::list_pending(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/admin/restaurants/approval
///
/// Approval activates the restaurant and issues a temporary login password,
/// returned once in this response and never stored in plaintext.
pub async fn decide_approval(
    State(state): State<AppState>,
    Json(req): Json<ApprovalRequest>,
) -> ApiResult<serde_json::Value> {
    match req.decision.as_str() {
        approval::APPROVED => {
            let temp_password = generate_temp_password();
            let hashed = hash_password(&temp_password)
                .map_err(|_| AppError::new(ErrorCode::InternalError))?;
            let updated = db::restaurants::approve(&state.pool, &req.rest_name, &hashed).await?;
            if !updated {
                return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
            }
            tracing::info!(rest_name = %req.rest_name, "Restaurant approved");
            Ok(Json(serde_json::json!({
                "message": "Restaurant approved",
                "tempPassword": temp_password,
            })))
        }
        approval::REJECTED => {
            let updated = db::restaurants::reject(&state.pool, &req.rest_name).await?;
            if !updated {
                return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
            }
            tracing::info!(rest_name = %req.rest_name, "Restaurant rejected");
            Ok(Json(
                serde_json::json!({ "message": "Restaurant rejected" }),
            ))
        }
        other => Err(AppError::invalid_request(format!(
            "Decision must be 'Approved' or 'Rejected', got '{other}'"
        ))
        .into()),
    }
}

/// POST /api/admin/restaurants/withdrawal
pub async fn decide_withdrawal(
    State(state): State<AppState>,
    Json(req): Json<WithdrawalDecision>,
) -> ApiResult<serde_json::Value> {
    let approve = match req.decision.as_str() {
        withdrawal::APPROVED => true,
        withdrawal::DENIED => false,
        other => {
            return Err(AppError::invalid_request(format!(
                "Decision must be 'Approved' or 'Denied', got '{other}'"
            ))
            .into());
        }
    };

    let updated = db::restaurants::resolve_withdrawal(&state.pool, &req.rest_name, approve).await?;
    if !updated {
        if !db::restaurants::exists(&state.pool, &req.rest_name).await? {
            return Err(AppError::new(ErrorCode::RestaurantNotFound).into());
        }
        return Err(AppError::new(ErrorCode::WithdrawalNotRequested).into());
    }

    let message = if approve {
        "Withdrawal approved, restaurant deactivated"
    } else {
        "Withdrawal denied"
    };
    Ok(Json(serde_json::json!({ "message": message })))
}

/// GET /api/admin/staff
pub async fn list_staff(State(state): State<AppState>) -> ApiResult<Vec<Staff>> {
    let rows = db::staff::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/admin/staff
pub async fn create_staff(
    State(state): State<AppState>,
    Json(req): Json<StaffCreate>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if db::staff::exists(&state.pool, &req.username).await? {
        return Err(AppError::new(ErrorCode::StaffUsernameExists).into());
    }

    let hashed =
        hash_password(&req.password).map_err(|_| AppError::new(ErrorCode::InternalError))?;
    let must_change = is_temp_password(&req.password);
    let now = shared::util::now_millis();
    db::staff::create(&state.pool, &req, &hashed, must_change, now).await?;

    Ok(Json(
        serde_json::json!({ "message": "Staff member created" }),
    ))
}

/// PUT /api/admin/staff/status
pub async fn set_staff_status(
    State(state): State<AppState>,
    Json(req): Json<StaffStatusUpdate>,
) -> ApiResult<serde_json::Value> {
    if req.status != staff_status::ACTIVE && req.status != staff_status::INACTIVE {
        return Err(AppError::invalid_request(format!(
            "Status must be 'Active' or 'Inactive', got '{}'",
            req.status
        ))
        .into());
    }

    let updated = db::staff::set_status(&state.pool, &req.username, &req.status).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::StaffNotFound).into());
    }
    Ok(Json(serde_json::json!({ "message": "Staff status updated" })))
}

/// GET /api/admin/drivers
pub async fn list_drivers(State(state): State<AppState>) -> ApiResult<Vec<Driver>> {
    let rows = db::drivers::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/admin/drivers
pub async fn create_driver(
    State(state): State<AppState>,
    Json(req): Json<DriverCreate>,
) -> ApiResult<serde_json::Value> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if db::drivers::exists(&state.pool, &req.driver_name).await? {
        return Err(AppError::new(ErrorCode::DriverNameExists).into());
    }

    let now = shared::util::now_millis();
    db::drivers::create(&state.pool, &req.driver_name, now).await?;
    Ok(Json(serde_json::json!({ "message": "Driver created" })))
}

/// PUT /api/admin/drivers/status
pub async fn set_driver_status(
    State(state): State<AppState>,
    Json(req): Json<DriverStatusUpdate>,
) -> ApiResult<serde_json::Value> {
    if req.status != driver_status::AVAILABLE && req.status != driver_status::UNAVAILABLE {
        return Err(AppError::invalid_request(format!(
            "Status must be 'Available' or 'Unavailable', got '{}'",
            req.status
        ))
        .into());
    }

    let updated = db::drivers::set_status(&state.pool, &req.driver_name, &req.status).await?;
    if !updated {
        return Err(AppError::new(ErrorCode::DriverNotFound).into());
    }
    Ok(Json(
        serde_json::json!({ "message": "Driver status updated" }),
    ))
}
