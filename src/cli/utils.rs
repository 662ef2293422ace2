use anyhow::{anyhow, bail};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let Some(data) = data {
                response["data"] = data;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(data) = data.filter(Value::is_object) {
                println!("  {}", format_fields(&data));
            }
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": false,
                "error": message
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Output a list of rows, one line each in text mode
pub fn output_records<T: Serialize>(
    output_format: OutputFormat,
    collection: &str,
    records: &[T],
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ collection: records }))?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No {} found", collection);
            }
            for record in records {
                println!("{}", format_fields(&serde_json::to_value(record)?));
            }
        }
    }
    Ok(())
}

/// `key=value` pairs for one JSON object; nulls print as `-`
pub fn format_fields(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, format_scalar(v)))
            .collect::<Vec<_>>()
            .join("  "),
        other => format_scalar(other),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Applies `field=value` assignments to `base` and deserializes the result.
///
/// Values take the JSON type of the field they replace: numbers and booleans
/// are parsed, anything else (including fields that are currently null) is
/// kept as a string.
pub fn apply_assignments<T: Serialize + DeserializeOwned>(
    base: &T,
    assignments: &[String],
) -> anyhow::Result<T> {
    let mut fields = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for assignment in assignments {
        let (field, raw) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected field=value, got '{}'", assignment))?;
        let field = field.trim();
        if field.is_empty() {
            bail!("expected field=value, got '{}'", assignment);
        }

        let value = match fields.get(field) {
            Some(Value::Number(_)) => {
                let n: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("{} must be a whole number", field))?;
                Value::from(n)
            }
            Some(Value::Bool(_)) => {
                let b: bool = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("{} must be true or false", field))?;
                Value::Bool(b)
            }
            _ => Value::String(raw.to_string()),
        };
        fields.insert(field.to_string(), value);
    }

    Ok(serde_json::from_value(Value::Object(fields))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Release, Stock};

    #[test]
    fn assignments_follow_field_types() {
        let stock = Stock {
            stock_id: 2,
            product_id: 1,
            drug_name: "Aspirin".to_string(),
            quantity: 10,
        };
        let assignments = ["quantity=25".to_string(), "drug_name=Aspirin 75".to_string()];
        let updated = apply_assignments(&stock, &assignments).unwrap();
        assert_eq!(updated.quantity, 25);
        assert_eq!(updated.drug_name, "Aspirin 75");
        assert_eq!(updated.stock_id, 2);
    }

    #[test]
    fn null_fields_take_strings() {
        let assignments = ["expiry_date=2026-03-01".to_string()];
        let release = apply_assignments(&Release::default(), &assignments).unwrap();
        assert_eq!(release.expiry_date.unwrap().to_string(), "2026-03-01");
    }

    #[test]
    fn rejects_malformed_assignments() {
        assert!(apply_assignments(&Stock::default(), &["quantity".to_string()]).is_err());
        assert!(apply_assignments(&Stock::default(), &["quantity=lots".to_string()]).is_err());
    }

    #[test]
    fn formats_rows() {
        let row = json!({"product_id": 3, "drug_name": "Insulin", "expiry_date": null});
        assert_eq!(format_fields(&row), "drug_name=Insulin  expiry_date=-  product_id=3");
    }
}
