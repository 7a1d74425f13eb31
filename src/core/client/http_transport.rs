use std::time::Duration;

use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use http::StatusCode;
use reqwest::Client;
use thiserror::Error;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Status and body of whatever the backend answered.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// Request left the client but nothing came back.
    #[error("no response received: {0}")]
    NoResponse(String),

    /// Request could not be built or dispatched.
    #[error("{0}")]
    Request(String),
}

/// Minimal GET seam under [`HttpClient`](super::http_client::HttpClient).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, request_id: &str) -> Result<RawResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, request_id: &str) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .header(REQUEST_ID_HEADER, request_id)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        let body = resp.text().await.map_err(classify);

        settle(status, body)
    }
}

/// A failed body read only counts as "no response" when the status was a success;
/// otherwise the error status is kept with an empty body.
fn settle(
    status: StatusCode,
    body: Result<String, TransportError>,
) -> Result<RawResponse, TransportError> {
    match body {
        Ok(body) => Ok(RawResponse { status, body }),
        Err(_) if !status.is_success() => Ok(RawResponse {
            status,
            body: String::new(),
        }),
        Err(e) => Err(e),
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::Request(err.to_string())
    } else if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
        TransportError::NoResponse(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
