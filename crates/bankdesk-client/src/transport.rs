//! HTTP transport seam
//!
//! `Transport` sends one request and hands back status and raw body. The
//! hyper implementation talks to the real backend.

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Body, Client};
use serde_json::Value;
use std::sync::Arc;

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_hyper(&self) -> hyper::Method {
        match self {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport reference type
pub type TransportRef = Arc<dyn Transport>;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ==================== hyper ====================

/// Plain HTTP/1 client
#[derive(Debug, Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector>,
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let uri: hyper::Uri = request.url.parse().map_err(|e: hyper::http::uri::InvalidUri| {
            TransportError::InvalidUrl {
                url: request.url.clone(),
                message: e.to_string(),
            }
        })?;

        let body = match &request.body {
            Some(value) => {
                Body::from(serde_json::to_vec(value).map_err(|e| TransportError::Encode(e.to_string()))?)
            }
            None => Body::empty(),
        };

        let http_request = hyper::Request::builder()
            .method(request.method.as_hyper())
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json, text/html")
            .body(body)
            .map_err(|e| TransportError::InvalidUrl {
                url: request.url.clone(),
                message: e.to_string(),
            })?;

        let response = self
            .client
            .request(http_request)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hyper_rejects_bad_url() {
        let transport = HyperTransport::new();
        let err = transport
            .send(HttpRequest { method: Method::Get, url: "not a url".to_string(), body: None })
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
