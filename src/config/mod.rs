//! Configuration loading and management for the airline ledger.
//!
//! This module loads the airline name, fee schedule floor and seed fee,
//! initial fees, and HTTP server settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use airline_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/airline.yaml").unwrap();
//! println!("Loaded airline: {}", config.config().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AirlineConfig, DEFAULT_BASE_FEE, DEFAULT_LISTEN_ADDR, FeeConfigEntry, FeeScheduleConfig,
    ServerConfig,
};
