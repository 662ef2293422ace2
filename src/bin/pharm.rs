use clap::Parser;
use pharmacy_inventory::cli::Cli;
use pharmacy_inventory::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("pharmacy_inventory=warn");

    let cli = Cli::parse();

    if let Err(e) = pharmacy_inventory::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
