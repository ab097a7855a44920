//! The HTTP client.

use crate::{FetchError, Method, ReqwestTransport, RequestBuilder, Response, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the storefront backend.
///
/// Holds a base URL, headers sent with every request, and the transport.
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: BTreeMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client over the default `reqwest` transport.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new()?)))
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: BTreeMap::new(),
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to all
    /// relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_default_header("Authorization", value)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }

    /// `GET` a JSON document, failing on non-2xx.
    pub async fn get_json<T: DeserializeOwned>(&self, url: impl Into<String>) -> Result<T, FetchError> {
        self.get(url).send().await?.error_for_status()?.json()
    }

    /// `POST` a JSON body and decode the JSON reply, failing on non-2xx.
    pub async fn post_json<B, T>(&self, url: impl Into<String>, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(url).json(body)?.send().await?.error_for_status()?.json()
    }
}

/// A request builder bound to a client's transport.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.builder = self.builder.timeout(timeout);
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.transport.send(self.builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records requests and answers with a fixed response.
    struct Recorder {
        seen: Mutex<Vec<RequestBuilder>>,
        status: u16,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::new(self.status, Default::default(), b"[1,2,3]".to_vec()))
        }
    }

    fn recorder(status: u16) -> Arc<Recorder> {
        Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
            status,
        })
    }

    #[tokio::test]
    async fn test_base_url_and_default_headers() {
        let transport = recorder(200);
        let client = FetchClient::with_transport(transport.clone())
            .with_base_url("http://localhost:8080/api/")
            .with_bearer_token("t0k");

        let ids: Vec<u32> = client.get_json("/products").await.unwrap();
        assert_eq!(ids, vec![1, 2, 3]);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url(), "http://localhost:8080/api/products");
        assert_eq!(seen[0].header_value("authorization"), Some("Bearer t0k"));
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let transport = recorder(200);
        let client = FetchClient::with_transport(transport.clone()).with_base_url("http://localhost:8080/api");
        client.get("http://localhost:5000/api/chat").send().await.unwrap();
        assert_eq!(transport.seen.lock().unwrap()[0].url(), "http://localhost:5000/api/chat");
    }

    #[tokio::test]
    async fn test_non_success_is_error() {
        let client = FetchClient::with_transport(recorder(500));
        let result: Result<Vec<u32>, _> = client.get_json("/products").await;
        assert_eq!(result.unwrap_err().status(), Some(500));
    }
}
