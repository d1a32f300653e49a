use planning_local::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting planning-local");

    // Load configuration
    let config = startup::load_config()?;

    // Serve pages until shutdown
    startup::start_server(config).await
}
