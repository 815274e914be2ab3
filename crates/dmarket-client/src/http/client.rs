/*
[INPUT]:  Credentials, HTTP configuration (base URL, timeouts), call arguments
[OUTPUT]: Signed HTTP round trips returning parsed JSON
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::auth::{Credentials, Ed25519Signer};
use crate::http::request::{SignedRequest, current_nonce};
use crate::http::signature::{RequestSigner, SignatureHeaders};
use crate::http::{DmarketError, Result};

/// Base URL for the DMarket API
pub const DEFAULT_BASE_URL: &str = "https://api.dmarket.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Signed HTTP client for the DMarket API.
///
/// Holds immutable credentials only, so one instance can serve concurrent
/// calls from many tasks. Every `call` performs exactly one request.
#[derive(Debug, Clone)]
pub struct DmarketClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
    signer: RequestSigner,
}

impl DmarketClient {
    /// Create a new client with default configuration
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let credentials = Credentials::new(public_key, secret_key)?;
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let signer = Ed25519Signer::from_hex(credentials.expose_secret())?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DmarketError::Config(format!("invalid base URL {}: {e}", config.base_url))
        })?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| DmarketError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            signer: RequestSigner::new(credentials.public_key(), signer),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build and sign a request without sending it
    pub fn prepare(
        &self,
        method: &str,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<(SignedRequest, SignatureHeaders)> {
        let request = SignedRequest::build(method, path, payload, current_nonce())?;
        let headers = self.signer.sign_request(&request);
        Ok((request, headers))
    }

    /// Make a signed API call.
    ///
    /// GET payloads become the query string, any other method sends the
    /// payload as a compact JSON body. Returns the parsed JSON response.
    pub async fn call(&self, method: &str, path: &str, payload: Option<&Value>) -> Result<Value> {
        let (request, headers) = self.prepare(method, path, payload)?;
        self.send(&request, &headers).await
    }

    /// Make a signed API call with any serializable payload
    pub async fn call_with<T>(&self, method: &str, path: &str, payload: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(payload)?;
        self.call(method, path, Some(&payload)).await
    }

    async fn send(&self, request: &SignedRequest, headers: &SignatureHeaders) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.canonical_path());
        debug!(
            method = %request.method(),
            path = %request.canonical_path(),
            nonce = %request.nonce(),
            api_key = %self.credentials.redacted_public_key(),
            body_len = request.body().map_or(0, str::len),
            "dmarket.call"
        );

        let mut builder = self.http_client.request(request.method().clone(), &url);
        for (name, value) in headers.pairs() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.as_bytes().to_vec());
        }

        let response = builder.send().await?;
        self.parse_response(response).await
    }

    async fn parse_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), body_len = text.len(), "dmarket.response");

        if status.is_client_error() || status.is_server_error() {
            return Err(DmarketError::status_error(status, text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            DmarketError::InvalidResponse(format!(
                "failed to parse response JSON: {e}. Body: {}",
                truncate(&text, 500)
            ))
        })
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
