use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Record, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    #[serde(default)]
    pub stock_id: i32,
    pub product_id: i32,
    #[serde(default)]
    pub drug_name: String,
    pub quantity: i32,
}

impl Record for Stock {
    const COLLECTION: &'static str = "stocks";

    fn key(&self) -> i32 {
        self.stock_id
    }

    fn label(&self) -> String {
        if self.drug_name.is_empty() {
            format!("stock #{}", self.stock_id)
        } else {
            self.drug_name.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id <= 0 {
            return Err(ValidationError::new("product_id", "A valid Product ID is required"));
        }
        if self.quantity < 0 {
            return Err(ValidationError::new("quantity", "Quantity cannot be negative"));
        }
        Ok(())
    }
}
