//! Scripted transport for tests
//!
//! Built for this crate's own tests and, through the `testing` feature, for
//! the tests of crates depending on it.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Respond { status: u16, body: Vec<u8>, delay: Option<Duration> },
    Fail(TransportError),
}

/// In-memory transport answering from a script
///
/// Routes are matched on method and the URL relative to the base. A route
/// with several queued replies answers them in order and keeps repeating the
/// last one. Unscripted requests get a 404 with a JSON error body.
#[derive(Debug, Default)]
pub struct MockTransport {
    base: String,
    routes: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    fn script(&self, method: Method, path: &str, reply: Reply) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.entry((method, path.to_string())).or_default().push_back(reply);
        }
    }

    /// Answer with a JSON body
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.script(method, path, Reply::Respond { status, body: body.to_string().into_bytes(), delay: None });
    }

    /// Answer with a JSON body after a delay
    pub fn on_delayed(&self, method: Method, path: &str, status: u16, body: Value, delay: Duration) {
        self.script(method, path, Reply::Respond { status, body: body.to_string().into_bytes(), delay: Some(delay) });
    }

    /// Answer with a raw body
    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.script(method, path, Reply::Respond { status, body: body.as_bytes().to_vec(), delay: None });
    }

    /// Fail at the transport level
    pub fn fail(&self, method: Method, path: &str, error: TransportError) {
        self.script(method, path, Reply::Fail(error));
    }

    /// Every request sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Requests whose base-relative URL starts with `prefix`
    pub fn requests_to(&self, prefix: &str) -> Vec<HttpRequest> {
        let full = format!("{}{}", self.base, prefix);
        self.requests().into_iter().filter(|r| r.url.starts_with(&full)).collect()
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<Reply> {
        let mut routes = self.routes.lock().ok()?;
        let queue = routes.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request.clone());
        }
        let path = request.url.strip_prefix(&self.base).unwrap_or(&request.url);

        match self.next_reply(request.method, path) {
            Some(Reply::Respond { status, body, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                Ok(HttpResponse { status, body })
            }
            Some(Reply::Fail(error)) => Err(error),
            None => Ok(HttpResponse {
                status: 404,
                body: serde_json::json!({ "error": format!("No route for {} {}", request.method, path) })
                    .to_string()
                    .into_bytes(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_repeats_last_reply() {
        let mock = MockTransport::new("http://mock/api");
        mock.on(Method::Get, "/accounts", 200, json!([1]));
        mock.on(Method::Get, "/accounts", 200, json!([2]));

        let request = HttpRequest { method: Method::Get, url: "http://mock/api/accounts".to_string(), body: None };
        let first = mock.send(request.clone()).await.unwrap();
        let second = mock.send(request.clone()).await.unwrap();
        let third = mock.send(request).await.unwrap();
        assert_eq!(first.body, b"[1]".to_vec());
        assert_eq!(second.body, b"[2]".to_vec());
        assert_eq!(third.body, b"[2]".to_vec());
        assert_eq!(mock.requests_to("/accounts").len(), 3);
    }

    #[tokio::test]
    async fn test_mock_unscripted_is_404() {
        let mock = MockTransport::new("http://mock/api");
        let response = mock
            .send(HttpRequest { method: Method::Post, url: "http://mock/api/nowhere".to_string(), body: None })
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }
}
