use crate::error::Result;

/// Status code and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Minimal blocking HTTP client trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation.
///
/// Implementations must return every response the server sends, whatever its
/// status code: deciding which codes count as success is up to the caller.
/// Only failures that prevent a response from being received are errors, and
/// they should be reported as [`Error::Timeout`](crate::Error::Timeout),
/// [`Error::Connection`](crate::Error::Connection) or
/// [`Error::Transport`](crate::Error::Transport).
///
/// Headers are sent exactly as given; implementations add none of their own.
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `headers` - Request headers as name-value pairs
    fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse>;

    /// Perform a PUT request with a JSON body.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `headers` - Request headers as name-value pairs
    /// * `json_body` - The JSON body as a string
    fn put_json(&self, url: &str, headers: &[(&str, String)], json_body: &str)
        -> Result<HttpResponse>;
}
