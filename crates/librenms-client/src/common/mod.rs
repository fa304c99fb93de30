//! Common utilities for the LibreNMS API client
//!
//! Provides the HTTP wrapper shared by all endpoint methods: base URL
//! handling, the fixed request headers, and one helper per HTTP verb.

pub mod envelope;

use crate::error::LibreNmsError;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    USER_AGENT,
};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

/// API path appended to the host
pub const API_PATH: &str = "/api/v0/";

/// Header carrying the API token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// User agent sent with every request
pub const USER_AGENT_VALUE: &str = "librenms-client Rust API";

/// Accept header sent with every request
pub const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept-Language header sent with every request
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

/// Build the API base URL from a host identifier
///
/// A host without an `http://` or `https://` prefix (in any case) gets
/// `http://`. The result always ends in `/api/v0/`.
pub fn api_base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if has_scheme(host, "http://") || has_scheme(host, "https://") {
        format!("{}{}", host, API_PATH)
    } else {
        format!("http://{}{}", host, API_PATH)
    }
}

fn has_scheme(host: &str, scheme: &str) -> bool {
    host.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Build the fixed header set sent on every request
pub fn build_headers(token: &str) -> Result<HeaderMap, LibreNmsError> {
    let mut token_value = HeaderValue::from_str(token)
        .map_err(|e| LibreNmsError::InvalidRequest(format!("API token is not a valid header value: {}", e)))?;
    token_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token_value);
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    Ok(headers)
}

/// Percent-encode a caller-supplied path segment
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Build query string from parameters
pub fn build_query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP client wrapper with the fixed LibreNMS headers
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, host: &str, token: &str) -> Result<Self, LibreNmsError> {
        Ok(Self {
            client,
            base_url: api_base_url(host),
            headers: build_headers(token)?,
        })
    }

    /// Get the base URL (ends in `/api/v0/`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the headers attached to every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build a full URL from a path relative to the API base
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body text, whatever the status
    async fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<String, LibreNmsError> {
        let response = request
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(LibreNmsError::Http)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned {}", method, path, status);
        }

        response.text().await.map_err(LibreNmsError::Http)
    }

    /// Make a GET request and return the raw body
    pub async fn get_text(&self, path: &str) -> Result<String, LibreNmsError> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        self.send("GET", path, self.client.get(&url)).await
    }

    /// Make a GET request and decode the body as JSON
    pub async fn get_json(&self, path: &str) -> Result<Value, LibreNmsError> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(LibreNmsError::Serialization)
    }

    /// Make a POST request with a JSON body and return the raw response body
    pub async fn post(&self, path: &str, body: &Value) -> Result<String, LibreNmsError> {
        let url = self.build_url(path);
        debug!("POST {} with body: {}", url, serde_json::to_string_pretty(body).unwrap_or_default());
        self.send("POST", path, self.client.post(&url).json(body)).await
    }

    /// Make a PATCH request with a JSON body and return the raw response body
    pub async fn patch(&self, path: &str, body: &Value) -> Result<String, LibreNmsError> {
        let url = self.build_url(path);
        debug!("PATCH {} with body: {}", url, serde_json::to_string_pretty(body).unwrap_or_default());
        self.send("PATCH", path, self.client.patch(&url).json(body)).await
    }

    /// Make a DELETE request and return the raw response body
    pub async fn delete(&self, path: &str) -> Result<String, LibreNmsError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);
        self.send("DELETE", path, self.client.delete(&url)).await
    }
}
