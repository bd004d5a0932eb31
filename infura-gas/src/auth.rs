use base64::Engine;
use std::fmt;

use crate::endpoint::Endpoint;

/// How the client proves its identity to the gas API.
///
/// Decided once at construction from whether a secret was supplied.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// API key carried as a URL path segment: `/v3/{api_key}/networks/...`
    PathEmbedded { api_key: String },

    /// API key and secret sent as `Authorization: Basic base64(key:secret)`
    BasicAuth { api_key: String, secret: String },
}

impl AuthMode {
    /// Picks the mode from credentials. An empty secret means path-embedded.
    pub fn from_credentials(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let secret = secret.into();
        if secret.is_empty() {
            Self::PathEmbedded { api_key }
        } else {
            Self::BasicAuth { api_key, secret }
        }
    }

    pub fn api_key(&self) -> &str {
        match self {
            Self::PathEmbedded { api_key } | Self::BasicAuth { api_key, .. } => api_key,
        }
    }

    /// True iff a non-empty secret is configured.
    pub fn has_secret(&self) -> bool {
        matches!(self, Self::BasicAuth { .. })
    }

    /// `Authorization` header value, present only in Basic-Auth mode.
    pub fn auth_header_value(&self) -> Option<String> {
        match self {
            Self::PathEmbedded { .. } => None,
            Self::BasicAuth { api_key, secret } => {
                let auth = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", api_key, secret));
                Some(format!("Basic {}", auth))
            }
        }
    }

    /// Request path for an endpoint on a chain.
    pub fn path_for(&self, chain_id: i64, endpoint: Endpoint) -> String {
        match self {
            Self::BasicAuth { .. } => {
                format!("/networks/{}/{}", chain_id, endpoint.as_str())
            }
            Self::PathEmbedded { api_key } => {
                format!("/v3/{}/networks/{}/{}", api_key, chain_id, endpoint.as_str())
            }
        }
    }
}

// Keeps the secret out of logs and panic messages.
impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathEmbedded { api_key } => f
                .debug_struct("PathEmbedded")
                .field("api_key", api_key)
                .finish(),
            Self::BasicAuth { api_key, .. } => f
                .debug_struct("BasicAuth")
                .field("api_key", api_key)
                .field("secret", &"***")
                .finish(),
        }
    }
}
