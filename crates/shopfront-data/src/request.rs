//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to hand to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: BTreeMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// URL without the query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// URL with the query parameters percent-encoded and appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Decode the JSON body, mainly for assertions in stub transports.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.body.as_deref().and_then(|b| serde_json::from_slice(b).ok())
    }

    pub fn timeout_value(&self) -> Option<Duration> {
        self.timeout
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value).map_err(|e| FetchError::Encode(e.to_string()))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Abort the request if no response arrives in time.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_encoded() {
        let request = RequestBuilder::new(Method::Get, "http://localhost:8080/api/products/search")
            .query("q", "smart watch & band");
        assert_eq!(
            request.full_url(),
            "http://localhost:8080/api/products/search?q=smart%20watch%20%26%20band"
        );
    }

    #[test]
    fn test_query_appends_to_existing() {
        let request = RequestBuilder::new(Method::Post, "/coupons/validate?code=SAVE10").query("amount", 1500);
        assert_eq!(request.full_url(), "/coupons/validate?code=SAVE10&amount=1500");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = RequestBuilder::new(Method::Post, "/contact")
            .json(&serde_json::json!({"email": "a@b.com"}))
            .unwrap();
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        let body: serde_json::Value = request.json_body().unwrap();
        assert_eq!(body["email"], "a@b.com");
    }

    #[test]
    fn test_bearer_auth() {
        let request = RequestBuilder::new(Method::Get, "/orders").bearer_auth("abc");
        assert_eq!(request.header_value("Authorization"), Some("Bearer abc"));
    }
}
