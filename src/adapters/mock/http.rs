//! Recording HTTP double.
//!
//! Canned responses are keyed by method and URL. Every request is kept so
//! tests can assert on the exact wire traffic.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{HttpClient, HttpError, HttpRequest, Response};

/// A request as the mock received it.
pub type RecordedRequest = HttpRequest;

/// What a matched route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, body included
    Success(Response),
    /// No response at all
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: String,
    url: String,
    response: MockResponse,
}

/// Matching order: exact method and URL, then the longest registered URL
/// prefix for that method, then the default response.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("GET", &format!("{}/users", docs), MockResponse::json(200, json!({})));
/// let backend = FirebaseBackend::new(http.clone(), options);
/// backend.get_accounts().await?;
/// assert_eq!(http.requests_with_method("GET").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Vec<Route>>>,
    fallback: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` requests to `url` (or any URL it prefixes).
    /// Registering the same route again replaces its response.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut routes = lock(&self.routes);
        routes.retain(|r| !(r.method == method && r.url == url));
        routes.push(Route {
            method: method.to_string(),
            url: url.to_string(),
            response,
        });
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.fallback) = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method.as_str() == method)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn route(&self, request: &HttpRequest) -> Option<MockResponse> {
        let routes = lock(&self.routes);
        let method = request.method.as_str();
        routes
            .iter()
            .filter(|r| r.method == method && request.url.starts_with(r.url.as_str()))
            .max_by_key(|r| (r.url == request.url, r.url.len()))
            .map(|r| r.response.clone())
            .or_else(|| lock(&self.fallback).clone())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        let answer = self.route(&request);
        let description = format!("{} {}", request.method, request.url);
        lock(&self.requests).push(request);
        match answer {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", description))),
        }
    }
}
