//! Request gateway
//!
//! Sends one request per call and normalizes the result:
//! - Credential headers from the client configuration
//! - JSON payload on POST/PUT, no payload otherwise
//! - Body parsed as JSON with raw-text fallback
//! - Transport failures returned as errors, HTTP statuses returned as data

use super::response::ApiResponse;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

/// Gateway to the Vibify API
///
/// Cloning is cheap: clones share the connection pool and configuration.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    config: ClientConfig,
}

impl Gateway {
    /// Create a gateway for the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(path, Method::GET, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(path, Method::POST, Some(body)).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.send(path, Method::PUT, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(path, Method::DELETE, None).await
    }

    /// Send one request to `base_url + path`.
    ///
    /// `body` is only sent for POST and PUT, where a missing body is sent as
    /// `{}`. Any status code, including 4xx/5xx, is returned as an
    /// [`ApiResponse`]; only failures to get a response are errors. A URL
    /// that cannot be built from `base_url + path` fails with
    /// [`Error::InvalidRequest`] before anything is sent.
    pub async fn send(&self, path: &str, method: Method, body: Option<&Value>) -> Result<ApiResponse> {
        let url = self.build_url(path);
        let mut req = self.client.request(method.clone(), &url);

        req = self.config.credentials().apply(req);

        if carries_body(&method) {
            let empty = Value::Object(serde_json::Map::new());
            req = req.json(body.unwrap_or(&empty));
        }

        debug!("Sending {} {}", method, url);

        let response = req.send().await.map_err(|e| {
            if e.is_builder() {
                return Error::InvalidRequest(e);
            }
            warn!("Request {} {} failed: {}", method, url, e);
            Error::Http(e)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            warn!("Reading response body of {} {} failed: {}", method, url, e);
            Error::Http(e)
        })?;

        let response = ApiResponse::from_parts(status, text);
        debug!(
            "Received {} from {} {} (json body: {})",
            status,
            method,
            url,
            response.body.is_json()
        );

        Ok(response)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Only POST and PUT send a payload
fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}
