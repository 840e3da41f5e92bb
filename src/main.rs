use bakery_seed::config::GeneratorConfig;
use bakery_seed::demo_data::{DataGenerator, GenerationOutcome};
use bakery_seed::lifecycle::{setup_tracing, StoreSystem};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = GeneratorConfig::from_env()?;
    info!(seed = config.seed, "Starting demo data generation");

    let system = StoreSystem::new();

    // The generator's client clones must be gone before shutdown.
    let result = DataGenerator::for_system(&system)
        .with_config(config)
        .load_data()
        .await;

    match &result {
        Ok(GenerationOutcome::Generated(summary)) => info!(
            users = summary.users,
            products = summary.products,
            pickup_locations = summary.pickup_locations,
            orders = summary.orders,
            fixture_order = %summary.fixture_order,
            "Demo data ready"
        ),
        Ok(GenerationOutcome::Skipped) => info!("Stores already populated, nothing generated"),
        Err(e) => error!(error = %e, "Demo data generation failed"),
    }

    system.shutdown().await?;
    result?;
    Ok(())
}
