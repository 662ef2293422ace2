use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::database::models::{ShortExpiry, Summary};

pub async fn short_expiry(
    client: &ApiClient,
    days: Option<i32>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let path = match days {
        Some(days) => format!("shortexpiry?days={}", days),
        None => "shortexpiry".to_string(),
    };
    let rows: Vec<ShortExpiry> = client.get(&path).await?;
    utils::output_records(output_format, "shortexpiry", &rows)
}

pub async fn summary(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let summary: Summary = client.get("summary").await?;

    match output_format {
        OutputFormat::Json => {
            let data = serde_json::to_value(&summary)?;
            utils::output_success(output_format, "Inventory summary", Some(data))
        }
        OutputFormat::Text => {
            println!("Products:       {}", summary.total_products);
            println!("Units in stock: {}", summary.total_stocks);
            println!("Releases:       {}", summary.total_releases);
            println!("Short expiry:   {}", summary.short_expiry);
            println!("Users:          {}", summary.total_users);
            Ok(())
        }
    }
}
