#![allow(clippy::module_inception)]
//! Blocking client for the eBay Sell Inventory API.
//!
//! Two operations, each a single authenticated request:
//! [`get_stock`](InventoryClient::get_stock) reads an item's quantity and
//! [`update_stock`](InventoryClient::update_stock) replaces it. Failures are
//! returned as [`Error`] and never retried.

mod client;
pub mod config;
pub mod error;

pub use client::structs::{
    Availability, Quantity, ShipToLocationAvailability, StockRecord, StockUpdate,
};
pub use client::{HttpClient, HttpResponse, InventoryClient};

#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use client::UreqClient;

pub use config::{load_dotenv, Config, ConfigError, DEFAULT_BASE_URL};
pub use error::{Error, Result};

/// Client built from the process environment, using the ureq transport.
#[cfg(feature = "ureq-client")]
pub fn default_client() -> Result<InventoryClient<UreqClient>> {
    let config = Config::from_env()?;
    InventoryClient::from_config(&config, UreqClient::with_timeout(config.timeout_secs))
}

/// Fetch the quantity in stock of an item, configured from the environment.
///
/// See [`Config::from_env`] for the variables read.
#[cfg(feature = "ureq-client")]
pub fn get_stock(item_id: &str) -> Result<Quantity> {
    default_client()?.get_stock(item_id)
}

/// Replace the quantity in stock of an item, configured from the environment.
#[cfg(feature = "ureq-client")]
pub fn update_stock(item_id: &str, quantity: impl Into<Quantity>) -> Result<()> {
    default_client()?.update_stock(item_id, quantity)
}
