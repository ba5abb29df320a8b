use log::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

use super::http_trait::HttpClient;
use super::structs::{Quantity, StockRecord, StockUpdate};

/// Client for the eBay Sell Inventory API.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// Every call is a single request: there are no retries and no state is
/// shared between calls beyond the base URL and the bearer token.
#[derive(Clone)]
pub struct InventoryClient<H: HttpClient> {
    http_client: H,
    base_url: Url,
    access_token: String,
}

impl<H: HttpClient> InventoryClient<H> {
    /// Create a new inventory client with a custom HTTP client implementation.
    ///
    /// # Arguments
    /// * `base_url` - Inventory item endpoint; the item ID is appended as the last path segment
    /// * `access_token` - Bearer token sent with every request
    /// * `http_client` - HTTP client implementation
    pub fn new(base_url: &str, access_token: impl Into<String>, http_client: H) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        // we need a trailing slash, if not present we append it
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(InventoryClient {
            http_client,
            base_url,
            access_token: access_token.into(),
        })
    }

    pub fn from_config(config: &Config, http_client: H) -> Result<Self> {
        Self::new(&config.base_url, config.access_token.clone(), http_client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single inventory item.
    ///
    /// The ID becomes exactly one path segment: it is not validated, and
    /// characters that cannot appear in a segment (`/`, `?`, `%`, non-ASCII...)
    /// are percent-encoded.
    pub fn item_url(&self, item_id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(item_id);
        Ok(url)
    }

    fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Authorization", format!("Bearer {}", self.access_token)),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    /// Fetch the full inventory record of an item.
    pub fn get_inventory_item(&self, item_id: &str) -> Result<StockRecord> {
        let url = self.item_url(item_id)?;
        debug!("GET {}", url);

        let response = self.http_client.get(url.as_str(), &self.headers())?;
        if response.status != 200 {
            warn!(
                "fetching stock for {:?} failed with status {}",
                item_id, response.status
            );
            return Err(Error::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetch the quantity in stock of an item.
    pub fn get_stock(&self, item_id: &str) -> Result<Quantity> {
        self.get_inventory_item(item_id)?
            .quantity()
            .ok_or(Error::MissingField("quantity"))
    }

    /// Replace the quantity in stock of an item.
    ///
    /// The quantity is sent as given. Both 200 and 204 count as success and
    /// the response body is ignored.
    pub fn update_stock(&self, item_id: &str, quantity: impl Into<Quantity>) -> Result<()> {
        let url = self.item_url(item_id)?;
        let update = StockUpdate::new(quantity.into());
        let json_body = serde_json::to_string(&update)?;
        debug!("PUT {} quantity={}", url, update.quantity());

        let response = self
            .http_client
            .put_json(url.as_str(), &self.headers(), &json_body)?;
        match response.status {
            200 | 204 => {
                info!("stock updated for {:?}", item_id);
                Ok(())
            }
            status => {
                warn!(
                    "updating stock for {:?} failed with status {}",
                    item_id, status
                );
                Err(Error::Status {
                    status,
                    body: response.body,
                })
            }
        }
    }
}
