use shared::models::{PendingRegistration, Restaurant, RestaurantRegistration};
use sqlx::SqlitePool;

/// Credential row for restaurant login; the hash is NULL until approval
#[derive(sqlx::FromRow)]
pub struct RestaurantAuthRow {
    pub rest_name: String,
    pub hashed_password: Option<String>,
    pub must_change_password: bool,
    pub approval_status: String,
    pub is_active: bool,
}

pub async fn exists(pool: &SqlitePool, rest_name: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM restaurants WHERE rest_name = ?")
        .bind(rest_name)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Store a registration as Pending: address row plus restaurant row, one transaction
pub async fn register(
    pool: &SqlitePool,
    reg: &RestaurantRegistration,
    now: i64,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let address = sqlx::query(
        "INSERT INTO addresses (street_address1, street_address2, city, state, zip)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&reg.street_address1)
    .bind(&reg.street_address2)
    .bind(&reg.city)
    .bind(&reg.state)
    .bind(&reg.zip)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO restaurants
            (rest_name, address_id, contact_name, contact_email, contact_phone,
             approval_status, is_active, created_at)
         VALUES (?, ?, ?, ?, ?, 'Pending', 0, ?)",
    )
    .bind(&reg.rest_name)
    .bind(address.last_insert_rowid())
    .bind(&reg.contact_name)
    .bind(&reg.contact_email)
    .bind(&reg.contact_phone)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn find_auth(
    pool: &SqlitePool,
    rest_name: &str,
) -> Result<Option<RestaurantAuthRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT rest_name, hashed_password, must_change_password, approval_status, is_active
         FROM restaurants WHERE rest_name = ?",
    )
    .bind(rest_name)
    .fetch_optional(pool)
    .await
}

/// Approve a pending registration: activate and install the temp credential
pub async fn approve(
    pool: &SqlitePool,
    rest_name: &str,
    temp_password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE restaurants
         SET approval_status = 'Approved', is_active = 1,
             hashed_password = ?, must_change_password = 1
         WHERE rest_name = ?",
    )
    .bind(temp_password_hash)
    .bind(rest_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn reject(pool: &SqlitePool, rest_name: &str) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE restaurants SET approval_status = 'Rejected' WHERE rest_name = ?")
            .bind(rest_name)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn request_withdrawal(pool: &SqlitePool, rest_name: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE restaurants SET withdrawal_status = 'Requested'
         WHERE rest_name = ? AND is_active = 1",
    )
    .bind(rest_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Resolve a pending withdrawal request; approval deactivates the restaurant
pub async fn resolve_withdrawal(
    pool: &SqlitePool,
    rest_name: &str,
    approve: bool,
) -> Result<bool, sqlx::Error> {
    let sql = if approve {
        "UPDATE restaurants SET withdrawal_status = 'Approved', is_active = 0
         WHERE rest_name = ? AND withdrawal_status = 'Requested'"
    } else {
        "UPDATE restaurants SET withdrawal_status = 'Denied'
         WHERE rest_name = ? AND withdrawal_status = 'Requested'"
    };
    let result = sqlx::query(sql).bind(rest_name).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list(
    pool: &SqlitePool,
    include_pending: bool,
    include_inactive: bool,
) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as(
        "SELECT rest_name, contact_name, contact_email, contact_phone,
                approval_status, withdrawal_status, is_active
         FROM restaurants
         WHERE (approval_status = 'Approved' OR ?)
           AND (is_active = 1 OR ?)
         ORDER BY rest_name",
    )
    .bind(include_pending)
    .bind(include_inactive)
    .fetch_all(pool)
    .await
}

pub async fn list_pending(pool: &SqlitePool) -> Result<Vec<PendingRegistration>, sqlx::Error> {
    sqlx::query_as(
        "SELECT r.rest_name, r.contact_name, r.contact_email, r.contact_phone,
                a.street_address1, a.street_address2, a.city, a.state, a.zip
         FROM restaurants r
         JOIN addresses a ON a.address_id = r.address_id
         WHERE r.approval_status = 'Pending'
         ORDER BY r.created_at",
    )
    .fetch_all(pool)
    .await
}

pub async fn update_password(
    pool: &SqlitePool,
    rest_name: &str,
    hashed_password: &str,
    must_change: bool,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE restaurants SET hashed_password = ?, must_change_password = ?
         WHERE rest_name = ?",
    )
    .bind(hashed_password)
    .bind(must_change)
    .bind(rest_name)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
