//! API routes for frontdash-server

pub mod admin;
pub mod auth;
pub mod orders;
pub mod restaurant;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, ServiceError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Staff and restaurant authentication
    let auth_routes = Router::new()
        .route("/api/auth/staff-login", post(auth::staff_login))
        .route("/api/auth/restaurant-login", post(auth::restaurant_login))
        .route("/api/auth/change-password", post(auth::change_password));

    // Admin console: registrations, staff, drivers
    let admin_routes = Router::new()
        .route("/api/admin/restaurants", get(admin::list_restaurants))
        .route(
            "/api/admin/restaurants/pending",
            get(admin::pending_registrations),
        )
        .route(
            "/api/admin/restaurants/approval",
            post(admin::decide_approval),
        )
        .route(
            "/api/admin/restaurants/withdrawal",
            post(admin::decide_withdrawal),
        )
        .route(
            "/api/admin/staff",
            get(admin::list_staff).post(admin::create_staff),
        )
        .route("/api/admin/staff/status", put(admin::set_staff_status))
        .route(
            "/api/admin/drivers",
            get(admin::list_drivers).post(admin::create_driver),
        )
        .route("/api/admin/drivers/status", put(admin::set_driver_status));

    // Restaurant self-service: registration, menu, hours
    let restaurant_routes = Router::new()
        .route("/api/restaurant/registration", post(restaurant::register))
        .route(
            "/api/restaurant/withdrawal",
            post(restaurant::request_withdrawal),
        )
        .route("/api/restaurant/menu", get(restaurant::get_menu))
        .route(
            "/api/restaurant/menu-item",
            post(restaurant::create_menu_item)
                .put(restaurant::update_menu_item)
                .delete(restaurant::delete_menu_item),
        )
        .route(
            "/api/restaurant/hours",
            get(restaurant::get_hours).put(restaurant::update_hours),
        );

    // Customer orders and delivery
    let order_routes = Router::new()
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{order_number}", get(orders::get_order))
        .route(
            "/api/orders/{order_number}/assign-driver",
            post(orders::assign_driver),
        )
        .route(
            "/api/orders/{order_number}/delivery",
            post(orders::set_delivery),
        );

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(restaurant_routes)
        .merge(order_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
