use std::{io, time::Duration};

use ureq::http::Response;
use ureq::Body;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};

use super::http_trait::{HttpClient, HttpResponse};

/// Minimal HTTP client implementation using ureq.
///
/// Non-success status codes come back as ordinary responses so the caller
/// can tell a 404 from a 409.
///
/// # Example
///
/// ```ignore
/// use ebay_inventory::{InventoryClient, UreqClient};
///
/// let http_client = UreqClient::new();
/// let client = InventoryClient::new(ebay_inventory::DEFAULT_BASE_URL, "token", http_client)?;
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new ureq HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .timeout_global(Some(Duration::from_secs(timeout_secs)))
                .http_status_as_error(false)
                .build()
                .into(),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
        let mut req = self.agent.get(url);

        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let response = req.call().map_err(map_error)?;
        read_response(response)
    }

    fn put_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        json_body: &str,
    ) -> Result<HttpResponse> {
        let mut req = self.agent.put(url);

        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let response = req.send(json_body).map_err(map_error)?;
        read_response(response)
    }
}

fn read_response(mut response: Response<Body>) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::ResponseBody(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

fn map_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::Timeout(_) => Error::Timeout(e.to_string()),
        ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
            Error::Connection(e.to_string())
        }
        ureq::Error::Io(ref io_err) => match io_err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Error::Timeout(e.to_string()),
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable => Error::Connection(e.to_string()),
            _ => Error::Transport(e.to_string()),
        },
        other => Error::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error() {
        let err = map_error(ureq::Error::Io(io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert!(matches!(err, Error::Connection(_)));

        let err = map_error(ureq::Error::Io(io::Error::from(io::ErrorKind::TimedOut)));
        assert!(matches!(err, Error::Timeout(_)));

        assert!(matches!(
            map_error(ureq::Error::ConnectionFailed),
            Error::Connection(_)
        ));
        assert!(matches!(
            map_error(ureq::Error::Io(io::Error::from(io::ErrorKind::InvalidData))),
            Error::Transport(_)
        ));
    }
}
