use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

/// Authentication material applied to a single request.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(String),
    /// HTTP basic auth.
    Basic {
        user: String,
        password: Option<String>,
    },
}

/// Per-request options forwarded verbatim to the transport.
///
/// Every field is optional and none of them is inspected or mutated by the
/// fetcher; they are handed to the underlying client as given. There is no
/// cancellation token: dropping the future returned by `fetch_resource`
/// aborts the in-flight request.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Request method; GET when absent.
    pub method: Option<Method>,
    /// Extra headers appended to the request unchanged.
    pub headers: Vec<(String, String)>,
    /// JSON request body.
    pub body: Option<Value>,
    /// Auth material, translated to the corresponding header.
    pub credentials: Option<Credentials>,
    /// Per-request timeout, forwarded to the transport. The fetcher imposes
    /// no timeout of its own.
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
