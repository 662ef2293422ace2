use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Credentials, NewAccount, ShortExpiry, Summary};

/// Insert a sign-up with an already-hashed password; returns the new account id
pub async fn create_account(
    pool: &PgPool,
    account: &NewAccount,
    password_hash: &str,
) -> Result<i32, DatabaseError> {
    let account_id: i32 = sqlx::query_scalar(
        "INSERT INTO accounts (full_name, name_with_initials, nic, email, username, password_hash)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING account_id",
    )
    .bind(account.full_name.trim())
    .bind(account.name_with_initials.trim())
    .bind(account.nic.trim())
    .bind(account.email.trim())
    .bind(account.username.trim())
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(account_id)
}

/// Look up a login by username
pub async fn find_credentials(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Credentials>, DatabaseError> {
    let credentials = sqlx::query_as::<_, Credentials>(
        "SELECT account_id, username, full_name, password_hash
         FROM accounts
         WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(credentials)
}

/// Releases expiring within `days` from today, soonest first. Already-expired
/// releases are included.
pub async fn short_expiry(pool: &PgPool, days: i32) -> Result<Vec<ShortExpiry>, DatabaseError> {
    let rows = sqlx::query_as::<_, ShortExpiry>(
        "SELECT release_id AS short_id, product_id, drug_name, expiry_date,
                (expiry_date - CURRENT_DATE) AS days_remaining
         FROM releases
         WHERE expiry_date IS NOT NULL AND expiry_date <= CURRENT_DATE + $1::int
         ORDER BY expiry_date, release_id",
    )
    .bind(days)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn summary(pool: &PgPool, short_expiry_days: i32) -> Result<Summary, DatabaseError> {
    let summary = sqlx::query_as::<_, Summary>(
        "SELECT
            (SELECT COUNT(*) FROM products) AS total_products,
            (SELECT COALESCE(SUM(quantity), 0) FROM stocks)::BIGINT AS total_stocks,
            (SELECT COUNT(*) FROM releases) AS total_releases,
            (SELECT COUNT(*) FROM releases
              WHERE expiry_date IS NOT NULL
                AND expiry_date <= CURRENT_DATE + $1::int) AS short_expiry,
            (SELECT COUNT(*) FROM users) AS total_users",
    )
    .bind(short_expiry_days)
    .fetch_one(pool)
    .await?;

    Ok(summary)
}
