//! HTTP transport abstraction and the reqwest-backed default client.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::Client;

use crate::error::{HdfsError, Result};

/// HTTP method used by a gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Byte stream yielded by read operations and transport responses.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Raw response handed back by a transport.
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as a live byte stream.
    pub body: ByteStream,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Collect the whole body into a string.
    pub async fn text(mut self) -> Result<String> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Pluggable HTTP transport.
///
/// The session owns a default [`HttpClient`] when none is injected; tests
/// and connection-pooling callers can supply their own implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single request and hand back the raw response.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<TransportResponse>;
}

/// HTTP client for making requests against the gateway.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new HTTP client with a proxy.
    ///
    /// This method is only available on native targets (not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| HdfsError::InvalidUrl(format!("invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| HdfsError::InvalidUrl(format!("failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (shared connection pool).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<TransportResponse> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/octet-stream")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(HdfsError::from))
            .boxed();

        Ok(TransportResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = HttpClient::new();
        let _default = HttpClient::default();
    }

    #[test]
    fn test_proxy_invalid() {
        let res = HttpClient::with_proxy(":::::::");
        assert!(res.is_err());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[tokio::test]
    async fn test_response_text_collects_chunks() {
        let body = futures::stream::iter(vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ])
        .boxed();
        let response = TransportResponse { status: 200, body };
        assert!(response.is_success());
        assert_eq!(response.text().await.unwrap(), "hello world");
    }
}
