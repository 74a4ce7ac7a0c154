//! End-to-end flow tests against the full router and a real SQLite file
//!
//! Each test gets its own temporary database, so tests run independently
//! and in parallel.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use frontdash_server::api;
use frontdash_server::config::Config;
use frontdash_server::state::AppState;

/// Build a router backed by a fresh database. The TempDir must stay alive
/// for the duration of the test.
async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("frontdash.db");
    let config = Config::with_database_path(path.to_string_lossy().to_string());
    let state = AppState::new(&config).await.expect("initialize state");
    (api::create_router(state), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse json body")
    };
    (status, value)
}

fn registration(rest_name: &str) -> Value {
    json!({
        "restName": rest_name,
        "contactName": "Maria Rossi",
        "contactEmail": "maria@example.com",
        "contactPhone": "3145551234",
        "streetAddress1": "100 Main St",
        "streetAddress2": null,
        "city": "St. Louis",
        "state": "MO",
        "zip": "63101",
    })
}

fn delivery_details() -> Value {
    json!({
        "streetAddress1": "42 Campus Dr",
        "streetAddress2": "Apt 3B",
        "city": "St. Louis",
        "state": "MO",
        "zip": "63103",
        "contactName": "Alex Chen",
        "contactPhone": "3145559876",
    })
}

/// Register a restaurant, approve it, and return the issued temp password.
async fn register_and_approve(app: &Router, rest_name: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/restaurant/registration",
        Some(registration(rest_name)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        "POST",
        "/api/admin/restaurants/approval",
        Some(json!({ "restName": rest_name, "decision": "Approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["tempPassword"]
        .as_str()
        .expect("approval returns a temp password")
        .to_string()
}

/// Create a menu item and return its generated id.
async fn add_menu_item(app: &Router, rest_name: &str, name: &str, price: f64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/restaurant/menu-item",
        Some(json!({
            "restName": rest_name,
            "itemName": name,
            "itemPrice": price,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["itemId"].as_i64().expect("menu item id")
}

#[tokio::test]
async fn health_check_works() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn full_order_lifecycle() {
    let (app, _dir) = test_app().await;
    register_and_approve(&app, "Pasta House").await;

    let pasta = add_menu_item(&app, "Pasta House", "Spaghetti Carbonara", 12.50).await;
    let soda = add_menu_item(&app, "Pasta House", "Italian Soda", 2.50).await;

    // 2 x 12.50 + 1 x 2.50 = 27.50 subtotal, 8.25% charge rounds to 2.27
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "restName": "Pasta House",
            "items": [
                { "itemId": pasta, "quantity": 2 },
                { "itemId": soda, "quantity": 1 },
            ],
            "delivery": delivery_details(),
            "tipAmount": 3.00,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "order creation failed: {body}");
    assert_eq!(body["subtotal"], 27.50);
    assert_eq!(body["serviceCharge"], 2.27);
    assert_eq!(body["tipAmount"], 3.00);
    assert_eq!(body["grandTotal"], 32.77);
    let order_number = body["orderNumber"].as_i64().expect("order number");

    // Full summary: header, both lines, delivery address
    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_number}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderStatus"], "In Progress");
    assert_eq!(body["restName"], "Pasta House");
    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["itemName"], "Spaghetti Carbonara");
    assert_eq!(items[0]["lineSubtotal"], 25.00);
    assert_eq!(body["delivery"]["contactName"], "Alex Chen");

    // Assign a driver, then mark delivered
    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/drivers",
        Some(json!({ "driverName": "Sam Park" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_number}/assign-driver"),
        Some(json!({ "driverName": "Sam Park" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_number}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderStatus"], "Out for Delivery");
    assert_eq!(body["driverName"], "Sam Park");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_number}/delivery"),
        Some(json!({ "date": "2026-08-29", "time": "18:45:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_number}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderStatus"], "Delivered");
    assert_eq!(body["deliveryDate"], "2026-08-29");
}

#[tokio::test]
async fn unknown_item_rejects_order_with_no_side_effects() {
    let (app, _dir) = test_app().await;
    register_and_approve(&app, "Taco Town").await;
    let real_item = add_menu_item(&app, "Taco Town", "Carnitas Taco", 4.25).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "restName": "Taco Town",
            "items": [
                { "itemId": real_item, "quantity": 1 },
                { "itemId": 9999, "quantity": 2 },
            ],
            "delivery": delivery_details(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["details"]["missingItemIds"], json!([9999]));

    // Nothing was written
    let (status, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("orders array").len(), 0);
}

#[tokio::test]
async fn omitted_tip_defaults_to_zero() {
    let (app, _dir) = test_app().await;
    register_and_approve(&app, "Pho Corner").await;
    let item = add_menu_item(&app, "Pho Corner", "Beef Pho", 11.00).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "restName": "Pho Corner",
            "items": [{ "itemId": item, "quantity": 1 }],
            "delivery": delivery_details(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "order creation failed: {body}");
    assert_eq!(body["subtotal"], 11.00);
    assert_eq!(body["serviceCharge"], 0.91);
    assert_eq!(body["tipAmount"], 0.0);
    assert_eq!(body["grandTotal"], 11.91);
}

#[tokio::test]
async fn driver_must_be_available_for_assignment() {
    let (app, _dir) = test_app().await;
    register_and_approve(&app, "Burger Barn").await;
    let item = add_menu_item(&app, "Burger Barn", "Double Cheeseburger", 8.75).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "restName": "Burger Barn",
            "items": [{ "itemId": item, "quantity": 1 }],
            "delivery": delivery_details(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order_number = body["orderNumber"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/drivers",
        Some(json!({ "driverName": "Lee Wong" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/drivers/status",
        Some(json!({ "driverName": "Lee Wong", "status": "Unavailable" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_number}/assign-driver"),
        Some(json!({ "driverName": "Lee Wong" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 8103);

    // Unknown driver is a 404
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_number}/assign-driver"),
        Some(json!({ "driverName": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8101);
}

#[tokio::test]
async fn staff_password_lifecycle() {
    let (app, _dir) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/staff",
        Some(json!({
            "username": "jsmith",
            "password": "temp-492817",
            "firstName": "Jordan",
            "lastName": "Smith",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Temp password logs in but flags a required change
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/staff-login",
        Some(json!({ "username": "jsmith", "password": "temp-492817" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mustChangePassword"], true);
    assert_eq!(body["role"], "staff");

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/change-password",
        Some(json!({
            "username": "jsmith",
            "oldPassword": "temp-492817",
            "newPassword": "correct-horse-battery",
            "userType": "staff",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/staff-login",
        Some(json!({ "username": "jsmith", "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mustChangePassword"], false);

    // Old password no longer works
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/staff-login",
        Some(json!({ "username": "jsmith", "password": "temp-492817" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);

    // Deactivated staff cannot log in even with the right password
    let (status, _) = send(
        &app,
        "PUT",
        "/api/admin/staff/status",
        Some(json!({ "username": "jsmith", "status": "Inactive" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/staff-login",
        Some(json!({ "username": "jsmith", "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1003);
}

#[tokio::test]
async fn restaurant_login_requires_approval() {
    let (app, _dir) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/restaurant/registration",
        Some(registration("Sushi Go")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Pending restaurants cannot log in
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/restaurant-login",
        Some(json!({ "username": "Sushi Go", "password": "anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 3002);

    // Approval issues a temp password that works
    let temp = {
        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/restaurants/approval",
            Some(json!({ "restName": "Sushi Go", "decision": "Approved" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["tempPassword"].as_str().unwrap().to_string()
    };

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/restaurant-login",
        Some(json!({ "username": "Sushi Go", "password": temp })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mustChangePassword"], true);
    assert_eq!(body["role"], "restaurant");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let (app, _dir) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/restaurant/registration",
        Some(registration("Curry Leaf")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/restaurant/registration",
        Some(registration("Curry Leaf")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3003);
}

#[tokio::test]
async fn registration_rejects_bad_phone() {
    let (app, _dir) = test_app().await;

    let mut payload = registration("Bad Phone Bistro");
    payload["contactPhone"] = json!("314-555-1234");
    let (status, body) = send(&app, "POST", "/api/restaurant/registration", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn withdrawal_deactivates_restaurant() {
    let (app, _dir) = test_app().await;
    let temp = register_and_approve(&app, "Green Bowl").await;

    // Deciding before any request is a conflict
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/restaurants/withdrawal",
        Some(json!({ "restName": "Green Bowl", "decision": "Approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3004);

    let (status, _) = send(
        &app,
        "POST",
        "/api/restaurant/withdrawal?restName=Green%20Bowl",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/restaurants/withdrawal",
        Some(json!({ "restName": "Green Bowl", "decision": "Approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Withdrawn restaurants are inactive and cannot log in
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/restaurant-login",
        Some(json!({ "username": "Green Bowl", "password": temp })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1003);

    let (status, body) = send(&app, "GET", "/api/admin/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, body) = send(
        &app,
        "GET",
        "/api/admin/restaurants?includeInactive=true",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["isActive"], false);
    assert_eq!(rows[0]["withdrawalStatus"], "Approved");
}

#[tokio::test]
async fn menu_and_hours_management() {
    let (app, _dir) = test_app().await;
    register_and_approve(&app, "Bagel Stop").await;

    let item = add_menu_item(&app, "Bagel Stop", "Everything Bagel", 2.25).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/restaurant/menu-item",
        Some(json!({
            "itemId": item,
            "restName": "Bagel Stop",
            "itemPrice": 2.75,
            "isAvailable": false,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        "/api/restaurant/menu?restName=Bagel%20Stop",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let menu = body.as_array().unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0]["itemPrice"], 2.75);
    assert_eq!(menu[0]["isAvailable"], false);
    assert_eq!(menu[0]["itemName"], "Everything Bagel");

    // Hours reject unknown day names, accept valid ones
    let (status, body) = send(
        &app,
        "PUT",
        "/api/restaurant/hours",
        Some(json!({
            "restName": "Bagel Stop",
            "dayOfWeek": "Funday",
            "openTime": "07:00:00",
            "closeTime": "14:00:00",
            "isClosed": false,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6101);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/restaurant/hours",
        Some(json!({
            "restName": "Bagel Stop",
            "dayOfWeek": "Monday",
            "openTime": "07:00:00",
            "closeTime": "14:00:00",
            "isClosed": false,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        "/api/restaurant/hours?restName=Bagel%20Stop",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let hours = body.as_array().unwrap();
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0]["dayOfWeek"], "Monday");
    assert_eq!(hours[0]["openTime"], "07:00:00");

    // Deleting the item does not touch past orders, only the menu
    let (status, _) = send(
        &app,
        "DELETE",
        "/api/restaurant/menu-item",
        Some(json!({ "itemId": item, "restName": "Bagel Stop" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        "/api/restaurant/menu?restName=Bagel%20Stop",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}
