//! Human-readable mirror of HTTP traffic, enabled with `ClientOption::Debug`.
//!
//! The output is meant for people debugging a call and has no stable format.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Request, Response};
use std::sync::Mutex;
use tracing::debug;

/// Receives diagnostic lines from a client with debugging enabled.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Forwards every line to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        debug!(target: "infura_gas::diagnostics", "{}", line);
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// Masks an `Authorization` value: first 10 and last 7 characters survive
/// when the value is longer than 20 characters, otherwise it becomes `***`.
pub fn mask_auth_header(auth: &str) -> String {
    let chars: Vec<char> = auth.chars().collect();
    if chars.len() > 20 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 7..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

/// Pretty-prints JSON, falling back to the raw text.
pub(crate) fn pretty_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn emit_headers(sink: &dyn DiagnosticSink, headers: &HeaderMap, mask_auth: bool) {
    sink.emit("Headers:");
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<non-ascii>");
        if mask_auth && name == AUTHORIZATION {
            sink.emit(&format!("  {}: {}", name, mask_auth_header(value)));
        } else {
            sink.emit(&format!("  {}: {}", name, value));
        }
    }
}

pub(crate) fn log_request(sink: &dyn DiagnosticSink, request: &Request, body: Option<&[u8]>) {
    let url = request.url();
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    sink.emit("========== HTTP Request ==========");
    sink.emit(&format!("Method: {}", request.method()));
    sink.emit(&format!("URL: {}", url));
    sink.emit(&format!("Protocol: {:?}", request.version()));
    sink.emit(&format!("Host: {}", host));
    emit_headers(sink, request.headers(), true);

    if let Some(body) = body.filter(|b| !b.is_empty()) {
        sink.emit(&format!("Request Body:\n{}", pretty_body(body)));
    }
    sink.emit("====================================");
}

pub(crate) fn log_response_headers(sink: &dyn DiagnosticSink, response: &Response) {
    sink.emit("========== HTTP Response Headers ==========");
    sink.emit(&format!("Status: {}", response.status()));
    sink.emit(&format!("Status Code: {}", response.status().as_u16()));
    sink.emit(&format!("Protocol: {:?}", response.version()));
    emit_headers(sink, response.headers(), false);
    sink.emit("============================================");
}

pub(crate) fn log_response_body(sink: &dyn DiagnosticSink, body: &[u8]) {
    sink.emit("========== HTTP Response Body ==========");
    if body.is_empty() {
        sink.emit("(empty body)");
    } else {
        sink.emit(&pretty_body(body));
    }
    sink.emit("===========================================");
}
