use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

use crate::pricing::{PriceSnapshot, currency_decimal};

/// Capture prices for the requested item ids, scoped to one restaurant.
///
/// Ids not on the restaurant's menu are simply absent from the snapshot;
/// the pricing module turns that into a whole-order rejection.
pub async fn price_snapshot(
    pool: &SqlitePool,
    rest_name: &str,
    item_ids: &[i64],
) -> Result<PriceSnapshot, sqlx::Error> {
    if item_ids.is_empty() {
        return Ok(PriceSnapshot::default());
    }

    let placeholders = vec!["?"; item_ids.len()].join(", ");
    let sql = format!(
        "SELECT item_id, item_price FROM menu_items
         WHERE rest_name = ? AND item_id IN ({placeholders})"
    );

    let mut query = sqlx::query_as::<_, (i64, f64)>(&sql).bind(rest_name);
    for id in item_ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;

    Ok(PriceSnapshot::from_pairs(rows.into_iter().filter_map(
        |(item_id, price)| currency_decimal(price).map(|p| (item_id, p)),
    )))
}

pub async fn create_item(pool: &SqlitePool, item: &MenuItemCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO menu_items (rest_name, item_name, item_description, item_price, is_available)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&item.rest_name)
    .bind(&item.item_name)
    .bind(&item.item_description)
    .bind(item.item_price)
    .bind(item.is_available.unwrap_or(true))
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_item(pool: &SqlitePool, item: &MenuItemUpdate) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE menu_items
         SET item_name = COALESCE(?, item_name),
             item_description = COALESCE(?, item_description),
             item_price = COALESCE(?, item_price),
             is_available = COALESCE(?, is_available)
         WHERE item_id = ? AND rest_name = ?",
    )
    .bind(&item.item_name)
    .bind(&item.item_description)
    .bind(item.item_price)
    .bind(item.is_available)
    .bind(item.item_id)
    .bind(&item.rest_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_item(
    pool: &SqlitePool,
    rest_name: &str,
    item_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM menu_items WHERE item_id = ? AND rest_name = ?")
        .bind(item_id)
        .bind(rest_name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list(pool: &SqlitePool, rest_name: &str) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as(
        "SELECT item_id, rest_name, item_name, item_description, item_price, is_available
         FROM menu_items WHERE rest_name = ? ORDER BY item_id",
    )
    .bind(rest_name)
    .fetch_all(pool)
    .await
}
