//! HTTP transport types exchanged between the core and its host.
//!
//! # Design
//! The core never opens a socket. `NewsClient` describes each call as an
//! `HttpRequest` value, the host performs it, and hands back an
//! `HttpResponse` (or an `ApiError::Transport` when the round trip itself
//! failed). Everything here is owned data so values can be queued, logged
//! and replayed from test vectors.

/// HTTP method for a request. The news API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries any query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Shorthand used by hosts and tests that do not care about headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
