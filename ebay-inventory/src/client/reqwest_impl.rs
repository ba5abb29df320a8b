use std::time::Duration;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};

use super::http_trait::{HttpClient, HttpResponse};

/// Blocking HTTP client implementation using reqwest.
///
/// reqwest's blocking API drives a private tokio runtime on a background
/// thread. It must not be used from inside another async runtime; prefer
/// `UreqClient` unless reqwest is already in the dependency tree.
///
/// # Example
///
/// ```ignore
/// use ebay_inventory::{InventoryClient, ReqwestClient};
///
/// let http_client = ReqwestClient::new()?;
/// let client = InventoryClient::new(ebay_inventory::DEFAULT_BASE_URL, "token", http_client)?;
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Transport(format!("failed to build reqwest client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        let mut request = self.client.get(url);

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().map_err(map_error)?;
        read_response(response)
    }

    fn put_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        json_body: &str,
    ) -> Result<HttpResponse> {
        let mut request = self.client.put(url);

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .body(json_body.to_string())
            .send()
            .map_err(map_error)?;
        read_response(response)
    }
}

fn read_response(response: reqwest::blocking::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| Error::ResponseBody(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

fn map_error(e: reqwest::Error) -> Error {
    // a connect timeout reports both, timeout wins
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else if e.is_connect() {
        Error::Connection(e.to_string())
    } else {
        Error::Transport(e.to_string())
    }
}
