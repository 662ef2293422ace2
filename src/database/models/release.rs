use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{require_text, Record, ValidationError};

/// A batch of a drug handed out, with its shelf-life window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Release {
    #[serde(default)]
    pub release_id: i32,
    pub product_id: i32,
    pub drug_name: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl Record for Release {
    const COLLECTION: &'static str = "releases";

    fn key(&self) -> i32 {
        self.release_id
    }

    fn label(&self) -> String {
        self.drug_name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id <= 0 {
            return Err(ValidationError::new("product_id", "Product ID required"));
        }
        require_text("drug_name", &self.drug_name, "Drug Name required")?;
        if let (Some(released), Some(expires)) = (self.release_date, self.expiry_date) {
            if expires < released {
                return Err(ValidationError::new(
                    "expiry_date",
                    "Expiry date cannot be before release date",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(release: Option<&str>, expiry: Option<&str>) -> Release {
        Release {
            release_id: 0,
            product_id: 1,
            drug_name: "Insulin".to_string(),
            release_date: release.map(|d| d.parse().unwrap()),
            expiry_date: expiry.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn expiry_must_follow_release() {
        let err = release(Some("2025-03-01"), Some("2025-02-01")).validate().unwrap_err();
        assert_eq!(err.field, "expiry_date");
        assert!(release(Some("2025-03-01"), Some("2025-03-01")).validate().is_ok());
        assert!(release(None, Some("2025-03-01")).validate().is_ok());
    }

    #[test]
    fn dates_use_iso_format_on_the_wire() {
        let json = serde_json::to_value(release(Some("2025-01-15"), None)).unwrap();
        assert_eq!(json["release_date"], "2025-01-15");
        assert!(json["expiry_date"].is_null());
    }
}
