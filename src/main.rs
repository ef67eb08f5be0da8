//! HTTP server for the airline ledger.
//!
//! Reads configuration from the YAML file named by `AIRLINE_CONFIG`
//! (default `./config/airline.yaml`) and serves the JSON API.

use std::path::PathBuf;
use std::sync::Arc;

use airline_ledger::api::{AppState, create_router};
use airline_ledger::clock::SystemClock;
use airline_ledger::config::{AirlineConfig, ConfigLoader};
use airline_ledger::dates::format_date;
use airline_ledger::Airline;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/airline.yaml";
const DEFAULT_AIRLINE_NAME: &str = "Airline KiuSys-Challenge";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("AIRLINE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let clock = Arc::new(SystemClock);
    let (airline, server) = match ConfigLoader::load(&config_path) {
        Ok(loader) => {
            init_tracing(&loader.config().server.log_level);
            info!("Configuration loaded from {}", config_path.display());
            (loader.build_airline(clock)?, loader.into_config().server)
        }
        Err(e) => {
            init_tracing("info");
            error!("Failed to load config: {}. Using defaults.", e);
            let config = AirlineConfig::new(DEFAULT_AIRLINE_NAME);
            (Airline::from_config(&config, clock)?, config.server)
        }
    };

    info!(
        airline = %airline,
        floor_date = %format_date(airline.fee_schedule().floor_date()),
        "Airline ready"
    );
    for entry in airline.fee_schedule().iter() {
        info!(
            effective_date = %format_date(entry.effective_date),
            fee = entry.fee,
            "Fee schedule entry"
        );
    }

    let app = create_router(AppState::new(airline));
    let listener = tokio::net::TcpListener::bind(&server.listen).await?;
    info!("Listening on {}", server.listen);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(fallback_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level)),
        )
        .init();
}
