use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    // Transport
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),

    // Remote rejection
    #[error("inventory API returned status {status}: {body}")]
    Status { status: u16, body: String },

    // Response shape
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    // Setup
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("base URL cannot hold path segments: {0}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// HTTP status code of a remote rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// True for failures that happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Timeout(_) | Error::Connection(_) | Error::Transport(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
