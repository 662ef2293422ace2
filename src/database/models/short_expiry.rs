use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only projection of a release whose expiry falls inside the alert window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ShortExpiry {
    pub short_id: i32,
    pub product_id: i32,
    pub drug_name: String,
    pub expiry_date: Option<NaiveDate>,
    /// Negative once expired
    pub days_remaining: Option<i32>,
}
