use chrono::{NaiveDate, NaiveTime, Timelike, Utc};
use shared::models::{DeliveryAddress, DeliveryDetails, Order, OrderItemDetail};
use sqlx::SqlitePool;

use crate::pricing::{OrderTotals, currency_f64};

/// Persist a priced order: header, lines, delivery address, and the
/// order-address link in a single transaction. Returns the order number.
pub async fn create(
    pool: &SqlitePool,
    rest_name: &str,
    totals: &OrderTotals,
    delivery: &DeliveryDetails,
) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let order_date = now.date_naive();
    let order_time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());

    let mut tx = pool.begin().await?;

    let header = sqlx::query(
        "INSERT INTO orders
            (rest_name, order_date, order_time, subtotal_amount, service_charge,
             tip_amount, grand_total, order_status)
         VALUES (?, ?, ?, ?, ?, ?, ?, 'In Progress')",
    )
    .bind(rest_name)
    .bind(order_date)
    .bind(order_time)
    .bind(currency_f64(totals.subtotal))
    .bind(currency_f64(totals.service_charge))
    .bind(currency_f64(totals.tip))
    .bind(currency_f64(totals.grand_total))
    .execute(&mut *tx)
    .await?;
    let order_number = header.last_insert_rowid();

    for line in &totals.lines {
        sqlx::query(
            "INSERT INTO order_items (order_number, item_id, quantity, line_subtotal)
             VALUES (?, ?, ?, ?)",
        )
        .bind(order_number)
        .bind(line.item_id)
        .bind(line.quantity)
        .bind(currency_f64(line.line_subtotal))
        .execute(&mut *tx)
        .await?;
    }

    let address = sqlx::query(
        "INSERT INTO addresses (street_address1, street_address2, city, state, zip)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&delivery.street_address1)
    .bind(&delivery.street_address2)
    .bind(&delivery.city)
    .bind(&delivery.state)
    .bind(&delivery.zip)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO order_delivery_addresses (order_number, address_id, contact_name, contact_phone)
         VALUES (?, ?, ?, ?)",
    )
    .bind(order_number)
    .bind(address.last_insert_rowid())
    .bind(&delivery.contact_name)
    .bind(&delivery.contact_phone)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(order_number)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as(
        "SELECT order_number, rest_name, order_date, order_time, subtotal_amount,
                service_charge, tip_amount, grand_total, order_status, driver_name,
                delivery_date, delivery_time
         FROM orders ORDER BY order_number",
    )
    .fetch_all(pool)
    .await
}

pub async fn find(pool: &SqlitePool, order_number: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as(
        "SELECT order_number, rest_name, order_date, order_time, subtotal_amount,
                service_charge, tip_amount, grand_total, order_status, driver_name,
                delivery_date, delivery_time
         FROM orders WHERE order_number = ?",
    )
    .bind(order_number)
    .fetch_optional(pool)
    .await
}

/// Lines joined with current menu names; items deleted since ordering
/// keep their id and stored line subtotal.
pub async fn list_items(
    pool: &SqlitePool,
    order_number: i64,
) -> Result<Vec<OrderItemDetail>, sqlx::Error> {
    sqlx::query_as(
        "SELECT oi.item_id,
                COALESCE(mi.item_name, '') AS item_name,
                COALESCE(mi.item_price, 0.0) AS item_price,
                oi.quantity, oi.line_subtotal
         FROM order_items oi
         LEFT JOIN menu_items mi ON mi.item_id = oi.item_id
         WHERE oi.order_number = ?
         ORDER BY oi.rowid",
    )
    .bind(order_number)
    .fetch_all(pool)
    .await
}

pub async fn delivery_address(
    pool: &SqlitePool,
    order_number: i64,
) -> Result<Option<DeliveryAddress>, sqlx::Error> {
    sqlx::query_as(
        "SELECT a.street_address1, a.street_address2, a.city, a.state, a.zip,
                oda.contact_name, oda.contact_phone
         FROM order_delivery_addresses oda
         JOIN addresses a ON a.address_id = oda.address_id
         WHERE oda.order_number = ?",
    )
    .bind(order_number)
    .fetch_optional(pool)
    .await
}

pub async fn assign_driver(
    pool: &SqlitePool,
    order_number: i64,
    driver_name: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET driver_name = ?, order_status = 'Out for Delivery'
         WHERE order_number = ?",
    )
    .bind(driver_name)
    .bind(order_number)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn set_delivered(
    pool: &SqlitePool,
    order_number: i64,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET delivery_date = ?, delivery_time = ?, order_status = 'Delivered'
         WHERE order_number = ?",
    )
    .bind(date)
    .bind(time)
    .bind(order_number)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
