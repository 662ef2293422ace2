use sqlx::PgPool;

use crate::database::manager::DatabaseError;

/// Idempotent DDL, one statement per entry (Postgres rejects multi-statement
/// prepared queries).
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        product_id SERIAL PRIMARY KEY,
        drug_name VARCHAR(100) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS stocks (
        stock_id SERIAL PRIMARY KEY,
        product_id INT NOT NULL,
        drug_name VARCHAR(100) NOT NULL DEFAULT '',
        quantity INT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS releases (
        release_id SERIAL PRIMARY KEY,
        product_id INT NOT NULL,
        drug_name VARCHAR(100) NOT NULL,
        release_date DATE NULL,
        expiry_date DATE NULL
    )",
    "CREATE INDEX IF NOT EXISTS releases_expiry_date_idx ON releases (expiry_date)",
    "CREATE TABLE IF NOT EXISTS users (
        user_id SERIAL PRIMARY KEY,
        full_name VARCHAR(100) NOT NULL,
        name_with_initials VARCHAR(50) NOT NULL DEFAULT '',
        nic VARCHAR(20) NOT NULL DEFAULT '',
        telephone VARCHAR(20) NOT NULL DEFAULT '',
        email VARCHAR(100) NULL UNIQUE,
        username VARCHAR(50) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS accounts (
        account_id SERIAL PRIMARY KEY,
        full_name VARCHAR(100) NOT NULL,
        name_with_initials VARCHAR(50) NOT NULL,
        nic VARCHAR(20) NOT NULL DEFAULT '',
        email VARCHAR(100) NOT NULL UNIQUE,
        username VARCHAR(50) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
