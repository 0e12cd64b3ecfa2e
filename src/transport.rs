//! Transport capability for performing HTTP round-trips.
//!
//! The client never constructs a transport on its own: callers build one
//! (usually [`ReqwestTransport`]) and inject it via
//! [`PushyBuilder::transport`](crate::PushyBuilder::transport). Timeouts and
//! any other connection tuning belong to the transport, configured before
//! injection.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{BoxError, PushyError};

/// HTTP method of a [`TransportRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data, for [`Transport::execute`].
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// A fully-read HTTP response handed back by a transport.
///
/// The transport reads the body to completion, so a failure mid-stream
/// surfaces as a transport error and the caller owns the bytes afterwards.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Capability contract for executing HTTP requests.
///
/// Each operation either completes the exchange and returns a usable
/// response, or reports the cause of the failure. No retries, no redirects
/// beyond what the concrete client does itself.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a GET request.
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError>;

    /// Execute a POST request with the given body.
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, BoxError>;

    /// Execute an arbitrary request.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError>;
}

/// Stock [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PushyError::transport)?;
        Ok(Self { client })
    }

    /// Wrap an already-configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, BoxError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        read_response(response).await
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<TransportResponse, BoxError> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    Ok(TransportResponse { status, body })
}
