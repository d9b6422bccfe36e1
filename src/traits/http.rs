//! HTTP seam for the REST backend.
//!
//! Adapters implement one method, [`HttpClient::send`]; the verb helpers
//! build an [`HttpRequest`] and go through it, so a recording double sees
//! every request in the same shape the production client does.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;

/// Request headers by name.
pub type Headers = HashMap<String, String>;

/// The verbs the document store and the credential service need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request. Bodies are JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn headers(mut self, headers: &Headers) -> Self {
        self.headers.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The body parsed as JSON, or `Null` when absent or malformed.
    pub fn json(&self) -> serde_json::Value {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}

/// A buffered response. Non-2xx statuses are still responses; callers
/// read the error body themselves.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, Bytes::from(value.to_string()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport failures: no response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("http error: {0}")]
    Other(String),
}

/// Sends requests to the remote services.
///
/// ```ignore
/// use painel::traits::{Headers, HttpClient};
///
/// let response = client.get(&url, &Headers::new()).await?;
/// let document: serde_json::Value = response.json()?;
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError>;

    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(HttpRequest::new(Method::Get, url).headers(headers))
            .await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(HttpRequest::new(Method::Post, url).headers(headers).body(body))
            .await
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(HttpRequest::new(Method::Patch, url).headers(headers).body(body))
            .await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(HttpRequest::new(Method::Delete, url).headers(headers))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());
        let request = HttpRequest::new(Method::Patch, "https://x/doc")
            .headers(&headers)
            .body(r#"{"fields":{}}"#);

        assert_eq!(request.method.to_string(), "PATCH");
        assert_eq!(request.headers["Authorization"], "Bearer t");
        assert_eq!(request.json(), json!({"fields": {}}));
        assert_eq!(HttpRequest::new(Method::Get, "u").json(), serde_json::Value::Null);
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(404, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json_body() {
        let response = Response::json_body(200, &json!({"name": "users"}));
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["name"], "users");
        assert_eq!(response.text().unwrap(), r#"{"name":"users"}"#);
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::Connect("refused".to_string()).to_string(),
            "connection failed: refused"
        );
        assert_eq!(
            HttpError::Timeout("30s".to_string()).to_string(),
            "request timed out: 30s"
        );
    }
}
