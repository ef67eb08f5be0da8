//! Configuration types for the airline ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::{day_month_year, default_floor_date};

/// The fee charged per package from the floor date onwards, until overridden.
pub const DEFAULT_BASE_FEE: i64 = 10;

/// Default bind address of the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Floor date and seed fee of a fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeeScheduleConfig {
    /// The earliest date a fee may be registered or queried for.
    #[serde(with = "day_month_year", default = "default_floor_date")]
    pub floor_date: NaiveDate,
    /// The fee in effect from the floor date.
    #[serde(default = "default_base_fee")]
    pub base_fee: i64,
}

impl Default for FeeScheduleConfig {
    fn default() -> Self {
        Self {
            floor_date: default_floor_date(),
            base_fee: DEFAULT_BASE_FEE,
        }
    }
}

fn default_base_fee() -> i64 {
    DEFAULT_BASE_FEE
}

/// A fee to register when the airline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeeConfigEntry {
    /// The date the fee takes effect.
    #[serde(with = "day_month_year")]
    pub date: NaiveDate,
    /// The per-package fee.
    pub fee: i64,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            log_level: default_log_level(),
        }
    }
}

fn default_listen() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The complete airline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AirlineConfig {
    /// The airline's name.
    pub name: String,
    /// Fee schedule floor and seed fee.
    #[serde(default)]
    pub schedule: FeeScheduleConfig,
    /// Fees registered on top of the seed entry.
    #[serde(default)]
    pub fees: Vec<FeeConfigEntry>,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl AirlineConfig {
    /// Creates a configuration with default schedule and server settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedule: FeeScheduleConfig::default(),
            fees: Vec::new(),
            server: ServerConfig::default(),
        }
    }
}
