use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    auth::AuthMode,
    diagnostics::{DiagnosticSink, TracingSink},
    error::{GasApiError, Result},
};

/// Base URL of the Infura Gas API
pub const BASE_URL: &str = "https://gas.api.infura.io";

/// Default HTTP timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single configuration override, applied in order at construction.
///
/// For any field the last option wins.
#[derive(Clone)]
pub enum ClientOption {
    /// Replace the base URL (e.g. a mock server)
    BaseUrl(String),
    /// Transport timeout for each request
    Timeout(Duration),
    /// Use this HTTP client instead of the default one. Drops any earlier
    /// `Timeout`; the supplied client's own timeout applies instead.
    HttpClient(Client),
    /// Mirror request/response details to the diagnostic sink
    Debug(bool),
    /// Where diagnostic lines go (default: `tracing` at debug level)
    DiagnosticSink(Arc<dyn DiagnosticSink>),
}

impl ClientOption {
    fn apply(self, config: &mut ClientConfig) {
        match self {
            ClientOption::BaseUrl(url) => config.base_url = url,
            ClientOption::Timeout(timeout) => config.timeout = Some(timeout),
            ClientOption::HttpClient(client) => {
                config.http_client = Some(client);
                config.timeout = None;
            }
            ClientOption::Debug(debug) => config.debug = debug,
            ClientOption::DiagnosticSink(sink) => config.sink = sink,
        }
    }
}

/// Settings the client is built from.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// May be empty; empty selects path-embedded authentication
    pub api_key_secret: String,
    pub base_url: String,
    /// `None` leaves the transport's own timeout in charge
    pub timeout: Option<Duration>,
    pub http_client: Option<Client>,
    pub debug: bool,
    pub sink: Arc<dyn DiagnosticSink>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_key_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_key_secret: api_key_secret.into(),
            base_url: BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            http_client: None,
            debug: false,
            sink: Arc::new(TracingSink),
        }
    }

    /// Applies options in call order.
    pub fn with_options(mut self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }
}

/// Client for the Infura Gas API.
///
/// Holds no per-call state, so one instance (or its clones, which share the
/// connection pool) can serve concurrent callers.
#[derive(Clone)]
pub struct InfuraGasClient {
    pub(crate) http: Client,
    pub(crate) auth: AuthMode,
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) debug: bool,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

impl InfuraGasClient {
    /// Creates a client from an API key and secret.
    ///
    /// A non-empty secret selects Basic authentication
    /// (`/networks/{chainId}/...`); an empty one falls back to the key in the
    /// URL path (`/v3/{apiKey}/networks/{chainId}/...`).
    pub fn new(api_key: impl Into<String>, api_key_secret: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_key_secret))
    }

    /// Creates a client that authenticates with the API key in the URL path.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, ""))
    }

    /// Like [`InfuraGasClient::new`], with options applied in order.
    pub fn with_options(
        api_key: impl Into<String>,
        api_key_secret: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_key_secret).with_options(options))
    }

    /// Like [`InfuraGasClient::with_api_key`], with options applied in order.
    pub fn with_api_key_and_options(
        api_key: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, "").with_options(options))
    }

    /// Builds a client from a complete configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = match config.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(GasApiError::ClientBuild)?
            }
        };

        Ok(Self {
            http,
            auth: AuthMode::from_credentials(config.api_key, config.api_key_secret),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            debug: config.debug,
            sink: config.sink,
        })
    }

    pub fn api_key(&self) -> &str {
        self.auth.api_key()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn auth_mode(&self) -> &AuthMode {
        &self.auth
    }

    /// True iff a non-empty secret is configured.
    pub fn has_secret(&self) -> bool {
        self.auth.has_secret()
    }

    /// Basic `Authorization` header value; `None` in path-embedded mode.
    pub fn auth_header_value(&self) -> Option<String> {
        self.auth.auth_header_value()
    }
}

impl std::fmt::Debug for InfuraGasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfuraGasClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
