//! Blocking HTTP client for the challenge endpoints.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! Covers the full relay flow: fetch input → deliver answers.

use std::time::Duration;

use rangerelay_protocol::InputPayload;

/// Challenge endpoint client (blocking).
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::blocking::Client,
    input_url: String,
    output_url: String,
}

/// Error type for relay transport operations.
#[derive(Debug)]
pub enum ClientError {
    /// Input payload failed to decode (missing field, wrong type,
    /// unknown query type literal)
    MalformedInput(String),
    /// Network error on either call
    Transport(String),
    /// Non-success HTTP status with response body
    Http(u16, String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl RelayClient {
    /// Create a new client for the two configured endpoints.
    pub fn new(input_url: impl Into<String>, output_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("rrelay/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            input_url: input_url.into(),
            output_url: output_url.into(),
        }
    }

    /// Fetch the challenge payload: one blocking GET.
    ///
    /// A non-success status or network failure is a transport error; a
    /// body that does not decode as the frozen payload shape is malformed
    /// input. Nothing is retried.
    pub fn fetch_input(&self) -> Result<InputPayload, ClientError> {
        log::debug!("GET {}", self.input_url);
        let response = self
            .http
            .get(&self.input_url)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http(status, body));
        }

        let text = response
            .text()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let payload: InputPayload = serde_json::from_str(&text)
            .map_err(|e| ClientError::MalformedInput(e.to_string()))?;

        log::debug!(
            "fetched payload: {} values, {} queries",
            payload.data.len(),
            payload.query.len(),
        );
        Ok(payload)
    }

    /// Deliver the ordered answers: one blocking POST.
    ///
    /// The token goes out unmodified as `Authorization: Bearer <token>`;
    /// the body is the bare JSON array of answers.
    pub fn deliver(&self, token: &str, answers: &[i64]) -> Result<(), ClientError> {
        log::debug!("POST {} ({} answers)", self.output_url, answers.len());
        let response = self
            .http
            .post(&self.output_url)
            .bearer_auth(token)
            .json(answers)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Http(status, body));
        }

        Ok(())
    }
}
