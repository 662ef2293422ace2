use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{require_text, Record, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    #[serde(default)]
    pub product_id: i32,
    pub drug_name: String,
}

impl Product {
    pub fn new(drug_name: impl Into<String>) -> Self {
        Self {
            product_id: 0,
            drug_name: drug_name.into(),
        }
    }
}

impl Record for Product {
    const COLLECTION: &'static str = "products";

    fn key(&self) -> i32 {
        self.product_id
    }

    fn label(&self) -> String {
        self.drug_name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("drug_name", &self.drug_name, "Drug name is required")
    }
}
