use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dashboard counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Summary {
    pub total_products: i64,
    /// Sum of stock quantities, not the number of stock rows
    pub total_stocks: i64,
    pub total_releases: i64,
    pub short_expiry: i64,
    pub total_users: i64,
}
