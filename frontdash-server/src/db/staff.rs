use shared::models::{Staff, StaffCreate};
use sqlx::SqlitePool;

/// Credential row for staff login
#[derive(sqlx::FromRow)]
pub struct StaffAuthRow {
    pub username: String,
    pub hashed_password: String,
    pub must_change_password: bool,
    pub status: String,
}

pub async fn exists(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM staff WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn create(
    pool: &SqlitePool,
    staff: &StaffCreate,
    hashed_password: &str,
    must_change: bool,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO staff
            (username, hashed_password, must_change_password, first_name, last_name,
             status, created_at)
         VALUES (?, ?, ?, ?, ?, 'Active', ?)",
    )
    .bind(&staff.username)
    .bind(hashed_password)
    .bind(must_change)
    .bind(&staff.first_name)
    .bind(&staff.last_name)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_auth(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<StaffAuthRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT username, hashed_password, must_change_password, status
         FROM staff WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Staff>, sqlx::Error> {
    sqlx::query_as(
        "SELECT username, first_name, last_name, status FROM staff ORDER BY username",
    )
    .fetch_all(pool)
    .await
}

pub async fn set_status(
    pool: &SqlitePool,
    username: &str,
    status: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE staff SET status = ? WHERE username = ?")
        .bind(status)
        .bind(username)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn update_password(
    pool: &SqlitePool,
    username: &str,
    hashed_password: &str,
    must_change: bool,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE staff SET hashed_password = ?, must_change_password = ? WHERE username = ?",
    )
    .bind(hashed_password)
    .bind(must_change)
    .bind(username)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
