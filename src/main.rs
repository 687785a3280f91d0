use clap::Parser;
use fruit_catalog::utils::{logger, validation::Validate};
use fruit_catalog::{CatalogSession, CliConfig, FruitRecord, FruityviceClient, LoadState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fruit-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let filter = config.filter.clone();
    let sort_by = config.sort_by;

    let client = FruityviceClient::with_default_client(config);
    let mut session = CatalogSession::new(client);

    match session.load().await {
        LoadState::Loaded => {
            tracing::info!("Catalog loaded: {} records", session.catalog().len());
            if let Some(loaded_at) = session.loaded_at() {
                tracing::debug!("Catalog loaded at {}", loaded_at.to_rfc3339());
            }

            let records = session.view(&filter, sort_by);
            if records.is_empty() {
                println!("No fruits matched.");
            } else {
                for record in &records {
                    print_record(record);
                }
                println!("{} fruits listed.", records.len());
            }
        }
        _ => {
            tracing::error!("Catalog load failed");
            eprintln!("❌ Data failed to load.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_record(record: &FruitRecord) {
    let n = &record.nutritions;
    println!("{} (#{})", record.name, record.id);
    println!(
        "  family: {}  order: {}  genus: {}",
        record.family, record.order, record.genus
    );
    println!(
        "  calories: {}  fat: {}  sugar: {}  carbohydrates: {}  protein: {}",
        n.calories, n.fat, n.sugar, n.carbohydrates, n.protein
    );
}
