/*
[INPUT]:  HTTP method, path, optional JSON payload, nonce
[OUTPUT]: Canonical request (path + query or body) and the exact string to sign
[POS]:    HTTP layer - request canonicalization shared by signing and dispatch
[UPDATE]: When the canonical form or query encoding rules change
*/

use std::time::{SystemTime, UNIX_EPOCH};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::http::{DmarketError, Result};

/// Everything except RFC 3986 unreserved characters is escaped; space becomes `%20`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A request in the canonical form the remote verifier recomputes.
///
/// For GET the payload lives in `canonical_path` as a query string and
/// `body` is `None`. For every other method the payload is the JSON body
/// and `canonical_path` is the path as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    method: Method,
    canonical_path: String,
    body: Option<String>,
    nonce: String,
}

impl SignedRequest {
    /// Canonicalize a call. `method` is case-insensitive.
    pub fn build(
        method: &str,
        path: &str,
        payload: Option<&Value>,
        nonce: impl Into<String>,
    ) -> Result<Self> {
        let method = parse_method(method)?;
        let mut canonical_path = path.to_string();
        let mut body = None;

        if let Some(payload) = payload.filter(|p| !is_empty_payload(p)) {
            if method == Method::GET {
                let params = payload.as_object().ok_or_else(|| {
                    DmarketError::Encoding(serde_json::Error::custom(
                        "GET payload must be a JSON object",
                    ))
                })?;
                canonical_path = format!("{path}?{}", encode_query(params));
            } else {
                body = Some(serde_json::to_string(payload)?);
            }
        }

        Ok(Self {
            method,
            canonical_path,
            body,
            nonce: nonce.into(),
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path plus query string, as sent on the request line and signed
    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// `method + canonical_path + body + nonce`, no separators
    pub fn string_to_sign(&self) -> String {
        format!(
            "{}{}{}{}",
            self.method.as_str(),
            self.canonical_path,
            self.body.as_deref().unwrap_or(""),
            self.nonce
        )
    }
}

/// Current Unix time in whole seconds, as a decimal string
pub fn current_nonce() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
        .to_string()
}

/// Encode a JSON object as a query string, keeping insertion order.
///
/// Strings are used as-is; every other value is rendered as JSON text, so
/// `null` and `true` appear literally.
pub fn encode_query(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(&query_value(value), QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn parse_method(method: &str) -> Result<Method> {
    let upper = method.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(DmarketError::InvalidMethod(method.to_string()));
    }
    Method::from_bytes(upper.as_bytes())
        .map_err(|_| DmarketError::InvalidMethod(method.to_string()))
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
