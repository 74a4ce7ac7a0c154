use shared::models::{BusinessHours, HoursUpdate};
use sqlx::SqlitePool;

/// Upsert one (restaurant, day) row
pub async fn upsert(pool: &SqlitePool, hours: &HoursUpdate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO business_hours (rest_name, day_of_week, open_time, close_time, is_closed)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT (rest_name, day_of_week)
         DO UPDATE SET open_time = excluded.open_time,
                       close_time = excluded.close_time,
                       is_closed = excluded.is_closed",
    )
    .bind(&hours.rest_name)
    .bind(&hours.day_of_week)
    .bind(&hours.open_time)
    .bind(&hours.close_time)
    .bind(hours.is_closed.unwrap_or(false))
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list(pool: &SqlitePool, rest_name: &str) -> Result<Vec<BusinessHours>, sqlx::Error> {
    sqlx::query_as(
        "SELECT rest_name, day_of_week, open_time, close_time, is_closed
         FROM business_hours WHERE rest_name = ?",
    )
    .bind(rest_name)
    .fetch_all(pool)
    .await
}
