use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use tracing::debug;

use crate::{
    auth::AuthMode,
    client::InfuraGasClient,
    diagnostics,
    error::{GasApiError, Result},
};

impl InfuraGasClient {
    /// Sends one request to `base_url + path` and returns the raw response.
    ///
    /// Always sets `Content-Type` and `Accept` to `application/json`; sets
    /// `Authorization` only in Basic-Auth mode. No retries: a transport
    /// failure is returned as [`GasApiError::Transport`]. Cancellation is
    /// dropping the returned future.
    pub async fn invoke<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url_str = format!("{}{}", self.base_url, path);
        let url = Url::parse(&url_str)
            .map_err(|e| GasApiError::request_build(format!("invalid URL {}: {}", url_str, e)))?;

        let body_bytes = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| GasApiError::request_build(format!("failed to marshal request body: {}", e)))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(auth) = self.auth.auth_header_value() {
            builder = builder.header(AUTHORIZATION, auth);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(bytes) = &body_bytes {
            builder = builder.body(bytes.clone());
        }

        let request = builder
            .build()
            .map_err(|e| GasApiError::request_build(e.to_string()))?;

        debug!(
            "{} {}",
            request.method(),
            redact_url(request.url(), &self.auth)
        );
        if self.debug {
            diagnostics::log_request(self.sink.as_ref(), &request, body_bytes.as_deref());
        }

        let response = self.http.execute(request).await.map_err(|e| {
            if self.debug {
                self.sink.emit(&format!("Request failed: {}", e));
            }
            GasApiError::Transport(e)
        })?;

        debug!("Response status: {}", response.status());
        if self.debug {
            diagnostics::log_response_headers(self.sink.as_ref(), &response);
        }

        Ok(response)
    }

    /// Sends a request and decodes a successful JSON response into `T`.
    ///
    /// Statuses outside `200..300` become [`GasApiError::Api`] carrying the
    /// raw body; bodies that do not decode become [`GasApiError::Decode`].
    pub async fn invoke_json<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned + fmt::Debug,
        B: Serialize + ?Sized,
    {
        let bytes = self.invoke_checked(method, path, body).await?;

        let result: T = serde_json::from_slice(&bytes).map_err(|e| {
            if self.debug {
                self.sink.emit(&format!("Failed to unmarshal response: {}", e));
            }
            GasApiError::Decode(e)
        })?;

        if self.debug {
            self.sink.emit(&format!("Parsed response object:\n{:#?}", result));
        }

        Ok(result)
    }

    /// Sends a request, checks the status and discards the body.
    pub async fn invoke_json_discard<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.invoke_checked(method, path, body).await.map(|_| ())
    }

    /// Reads the whole body, mirrors it when debugging, then checks the status.
    async fn invoke_checked<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let response = self.invoke(method, path, body).await?;
        let status = response.status();

        // Consumes the response, so the connection is released on every path below
        let bytes = response.bytes().await.map_err(GasApiError::Transport)?;

        if self.debug {
            diagnostics::log_response_body(self.sink.as_ref(), &bytes);
        }

        if !status.is_success() {
            return Err(GasApiError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}

/// URL with an embedded API key replaced by `***`.
///
/// Works on the already percent-encoded path segments: the key is the
/// segment between `v3` and `networks`.
fn redact_url(url: &Url, auth: &AuthMode) -> String {
    if !matches!(auth, AuthMode::PathEmbedded { .. }) {
        return url.to_string();
    }

    let mut segments: Vec<&str> = match url.path_segments() {
        Some(segments) => segments.collect(),
        None => return url.to_string(),
    };
    let key_index = segments
        .windows(3)
        .position(|w| w[0] == "v3" && w[2] == "networks")
        .map(|i| i + 1);

    match key_index {
        Some(i) => {
            segments[i] = "***";
            let mut redacted = url.clone();
            redacted.set_path(&format!("/{}", segments.join("/")));
            redacted.to_string()
        }
        None => url.to_string(),
    }
}
