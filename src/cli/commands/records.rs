use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::client::{ApiClient, HttpResource, Resource};
use crate::database::models::Record;

#[derive(Subcommand)]
pub enum RecordCommands {
    #[command(about = "List every row")]
    List,

    #[command(about = "Create a row from field=value pairs")]
    Add {
        #[arg(help = "field=value pairs, e.g. drug_name=Aspirin")]
        fields: Vec<String>,
    },

    #[command(about = "Change fields of an existing row")]
    Update {
        #[arg(help = "Row ID")]
        id: i32,
        #[arg(help = "field=value pairs to change")]
        fields: Vec<String>,
    },

    #[command(about = "Delete a row")]
    Delete {
        #[arg(help = "Row ID")]
        id: i32,
    },
}

pub async fn handle<T: Record + Default>(
    cmd: RecordCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let resource = HttpResource::<T>::new(client.clone());

    match cmd {
        RecordCommands::List => {
            let records = resource.list().await?;
            utils::output_records(output_format, T::COLLECTION, &records)
        }
        RecordCommands::Add { fields } => {
            let record: T = utils::apply_assignments(&T::default(), &fields)?;
            record.validate()?;
            let created = resource.create(&record).await?;
            utils::output_success(
                output_format,
                &format!("Created {} #{}", T::COLLECTION, created.key()),
                Some(serde_json::to_value(&created)?),
            )
        }
        RecordCommands::Update { id, fields } => {
            let current: T = client.get(&format!("{}/{}", T::COLLECTION, id)).await?;
            let record = utils::apply_assignments(&current, &fields)?;
            record.validate()?;
            let updated = resource.update(id, &record).await?;
            utils::output_success(
                output_format,
                &format!("Updated {} #{}", T::COLLECTION, id),
                Some(serde_json::to_value(&updated)?),
            )
        }
        RecordCommands::Delete { id } => {
            resource.delete(id).await?;
            let message = format!("Deleted {} #{}", T::COLLECTION, id);
            utils::output_success(output_format, &message, None)
        }
    }
}
