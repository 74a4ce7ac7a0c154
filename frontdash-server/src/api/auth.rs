//! Authentication endpoints: staff login, restaurant login, change-password

use axum::{Json, extract::State};
use shared::error::{AppError, ErrorCode};
use shared::models::restaurant::approval;
use shared::models::staff_status;
use shared::models::user_type;
use shared::models::{ChangePasswordRequest, LoginRequest, LoginResponse};

use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, is_temp_password, verify_password};

use super::ApiResult;

/// POST /api/auth/staff-login
pub async fn staff_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let username = req.username.trim();
    let staff = db::staff::find_auth(&state.pool, username)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &staff.hashed_password) {
        return Err(AppError::new(ErrorCode::InvalidCredentials).into());
    }
    if staff.status != staff_status::ACTIVE {
        return Err(
            AppError::with_message(ErrorCode::AccountInactive, "Inactive staff user").into(),
        );
    }

    let message = if staff.must_change_password {
        "Password change required"
    } else {
        "Staff login successful"
    };
    Ok(Json(LoginResponse {
        success: true,
        role: "staff".into(),
        message: message.into(),
        must_change_password: staff.must_change_password,
    }))
}

/// POST /api/auth/restaurant-login
pub async fn restaurant_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let rest_name = req.username.trim();
    let restaurant = db::restaurants::find_auth(&state.pool, rest_name)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if restaurant.approval_status != approval::APPROVED {
        return Err(AppError::new(ErrorCode::RestaurantNotApproved).into());
    }
    if !restaurant.is_active {
        return Err(
            AppError::with_message(ErrorCode::AccountInactive, "Restaurant is inactive").into(),
        );
    }
    // No credential until approval issues the temp password
    let Some(hash) = restaurant.hashed_password.as_deref() else {
        return Err(AppError::new(ErrorCode::InvalidCredentials).into());
    };
    if !verify_password(&req.password, hash) {
        return Err(AppError::new(ErrorCode::InvalidCredentials).into());
    }

    let message = if restaurant.must_change_password {
        "Password change required"
    } else {
        "Restaurant login successful"
    };
    Ok(Json(LoginResponse {
        success: true,
        role: "restaurant".into(),
        message: message.into(),
        must_change_password: restaurant.must_change_password,
    }))
}

/// POST /api/auth/change-password
///
/// Verifies the old password, installs a fresh hash, and clears the
/// must-change flag (unless the new password is itself a temp password).
pub async fn change_password(
    State(state): State<AppState>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<serde_json::Value> {
    let username = req.username.trim();
    let must_change = is_temp_password(&req.new_password);

    match req.user_type.as_str() {
        user_type::STAFF => {
            let staff = db::staff::find_auth(&state.pool, username)
                .await?
                .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
            if !verify_password(&req.old_password, &staff.hashed_password) {
                return Err(AppError::validation("Old password is incorrect").into());
            }
            let hashed = hash_password(&req.new_password)
                .map_err(|_| AppError::new(ErrorCode::InternalError))?;
            db::staff::update_password(&state.pool, username, &hashed, must_change).await?;
        }
        user_type::RESTAURANT => {
            let restaurant = db::restaurants::find_auth(&state.pool, username)
                .await?
                .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
            let old_ok = restaurant
                .hashed_password
                .as_deref()
                .is_some_and(|hash| verify_password(&req.old_password, hash));
            if !old_ok {
                return Err(AppError::validation("Old password is incorrect").into());
            }
            let hashed = hash_password(&req.new_password)
                .map_err(|_| AppError::new(ErrorCode::InternalError))?;
            db::restaurants::update_password(&state.pool, username, &hashed, must_change).await?;
        }
        other => {
            return Err(AppError::invalid_request(format!(
                "Unknown user type: {other}"
            ))
            .into());
        }
    }

    Ok(Json(
        serde_json::json!({ "message": "Password changed successfully" }),
    ))
}
