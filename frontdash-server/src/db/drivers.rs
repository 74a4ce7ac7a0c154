use shared::models::Driver;
use sqlx::SqlitePool;

pub async fn exists(pool: &SqlitePool, driver_name: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM drivers WHERE driver_name = ?")
        .bind(driver_name)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn create(pool: &SqlitePool, driver_name: &str, now: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO drivers (driver_name, status, created_at) VALUES (?, 'Available', ?)")
        .bind(driver_name)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find(pool: &SqlitePool, driver_name: &str) -> Result<Option<Driver>, sqlx::Error> {
    sqlx::query_as("SELECT driver_name, status FROM drivers WHERE driver_name = ?")
        .bind(driver_name)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Driver>, sqlx::Error> {
    sqlx::query_as("SELECT driver_name, status FROM drivers ORDER BY driver_name")
        .fetch_all(pool)
        .await
}

pub async fn set_status(
    pool: &SqlitePool,
    driver_name: &str,
    status: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE drivers SET status = ? WHERE driver_name = ?")
        .bind(status)
        .bind(driver_name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
