//! Transports that actually move requests.

use crate::{FetchError, Method, RequestBuilder, Response};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Sends a request and buffers the response.
///
/// Non-2xx responses are returned as `Ok`; turning them into errors is the
/// caller's call (see [`Response::error_for_status`]).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Production transport backed by `reqwest`.
///
/// Requests run until the server answers or the connection fails; callers
/// that need a deadline set one per request or race their own.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, FetchError> {
        Self::build(reqwest::Client::builder(), None)
    }

    /// Build a transport that gives up on every request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(reqwest::Client::builder().timeout(timeout), Some(timeout))
    }

    fn build(builder: reqwest::ClientBuilder, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    /// The client-wide timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = request.full_url();
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        tracing::debug!(method = %request.method, url = %url, "sending request");
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Transport for running without a backend: every request fails as if the
/// server were down.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait]
impl Transport for OfflineTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        Err(FetchError::Network(format!(
            "offline: {} {}",
            request.method,
            request.full_url()
        )))
    }
}
