use thiserror::Error;

/// Error type for every call made through the gas API client.
///
/// Each call fails at most once and is never retried internally; whether a
/// failure is worth retrying is the caller's decision.
#[derive(Error, Debug)]
pub enum GasApiError {
    /// The request could not be assembled (invalid URL, unserializable body).
    #[error("failed to create request: {0}")]
    RequestBuild(String),

    /// The request never produced a complete response: DNS, connect,
    /// timeout, or a failure while reading the response body.
    #[error("failed to execute request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status outside `200..300`.
    ///
    /// The body is kept verbatim; the upstream error schema is not parsed.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body is not valid JSON or does not fit the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The default HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Type alias for Results in this library.
pub type Result<T> = std::result::Result<T, GasApiError>;

impl GasApiError {
    /// Creates a RequestBuild error.
    pub fn request_build(msg: impl Into<String>) -> Self {
        Self::RequestBuild(msg.into())
    }

    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the transport gave up because a timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
