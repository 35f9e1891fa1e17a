//! HTTP transport abstraction for testability

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::TransportError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request with a bearer credential
    async fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, TransportError>;

    /// Send a POST request with a JSON body and a bearer credential
    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// Production HTTP client using reqwest
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse, TransportError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TransportError(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Reading response body: {}", e)))?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError(format!("POST {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Reading response body: {}", e)))?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A URL that will always refuse connections (port 1 is reserved and unbound)
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/api/v1/regulations";

    #[tokio::test]
    async fn get_connection_refused_returns_transport_error() {
        let client = ReqwestHttpClient::new(Duration::from_secs(1));
        let err = client.get(UNREACHABLE_URL, "token").await.unwrap_err();
        assert!(
            err.0
                .starts_with("GET http://127.0.0.1:1/api/v1/regulations failed:"),
            "{}",
            err.0
        );
    }

    #[tokio::test]
    async fn post_json_connection_refused_returns_transport_error() {
        let client = ReqwestHttpClient::new(Duration::from_secs(1));
        let err = client
            .post_json(UNREACHABLE_URL, "token", serde_json::json!({"url": "x"}))
            .await
            .unwrap_err();
        assert!(
            err.0
                .starts_with("POST http://127.0.0.1:1/api/v1/regulations failed:"),
            "{}",
            err.0
        );
    }
}
