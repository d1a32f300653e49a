use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{AppResult, Error};
use crate::shutdown;
use crate::web::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the shared page state from configuration
pub fn build_state(config: &Config) -> AppResult<AppState> {
    let client = ApiClient::new(config.api_base_url.clone())?;
    Ok(AppState::new(Arc::new(client), config.locale.clone()))
}

/// Bind the listener and serve pages until a shutdown signal arrives
pub async fn start_server(config: Config) -> miette::Result<()> {
    if config.api_base_url.is_empty() {
        info!("API_BASE_URL is empty, API paths are used as-is");
    } else {
        info!("Using events API at {}", config.api_base_url);
    }

    let state = build_state(&config)?;
    let app = web::router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("Server shut down");
    Ok(())
}
