//! HTTP transport capability and the reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// HTTP method for a pipeline request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A completed HTTP exchange: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Narrow transport seam: one request in, one response out.
///
/// Implementations perform exactly one round trip per call. Timeouts and
/// certificate policy belong to the implementation, not to individual
/// requests. Test doubles implement this to exercise the client without
/// a network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a single request. `Err` means the round trip itself failed
    /// (connect error, timeout, protocol error); HTTP-level failures come
    /// back as an [`HttpResponse`] with a non-200 status.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Opaque transport-level failure.
#[derive(Debug, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Configuration for the production transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service hostname, without scheme.
    pub service: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Disable to talk to servers with self-signed certificates.
    pub verify_certificates: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service: "bsky.social".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            verify_certificates: true,
        }
    }
}

impl ClientConfig {
    /// Base URL for the configured service.
    pub fn service_url(&self) -> String {
        format!("https://{}", self.service)
    }
}

/// Production transport over a pooled reqwest client.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(!config.verify_certificates)
            .build()
            .expect("failed to build HTTP client");

        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        headers: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Delete => self.http.delete(url),
        };

        for (name, value) in headers {
            request = request.header(*name, value);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        debug!(method = method.as_str(), url, status, "request completed");

        Ok(HttpResponse { status, body })
    }
}
