//! Production [`HttpClient`] over reqwest (rustls).

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpError, HttpRequest, Method, Response};

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (proxies, TLS roots, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::Connect(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidRequest(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(reqwest_method(method), &url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        // URLs may carry the API key; log the path only
        tracing::trace!(%method, status, path = url.split('?').next().unwrap_or_default(), "http");
        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Headers;

    #[test]
    fn test_method_mapping() {
        assert_eq!(reqwest_method(Method::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not-a-valid-url", &Headers::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_transport_error() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let client = ReqwestHttpClient::with_client(custom);
        let result = client
            .patch("http://127.0.0.1:59999/doc", "{}", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::Connect(_)) | Err(HttpError::Other(_)) | Err(HttpError::Timeout(_))
        ));
    }
}
