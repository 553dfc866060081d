//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `ZoomClient` builds an
//! `HttpRequest` per call and hands it to a `Transport`, which performs the
//! blocking round-trip and returns an `HttpResponse`. The client never keeps a
//! request around after the call returns, so there is no per-call state to
//! clear or to race on.
//!
//! Status interpretation is not the transport's job: a 404 is a successful
//! round-trip that yields an `HttpResponse` with `status == 404`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP method for a request. Only `Get` changes how arguments are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ZoomClient::build_request`. `url` is absolute (base URI plus
/// route, plus the query string for GET requests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// First header value whose name matches `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    /// Response headers as received. `ZoomClient` does not read them; they are
    /// kept for callers that drive a `Transport` directly.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    /// Body text. Bytes that are not UTF-8 are replaced, so such a body fails
    /// JSON decoding rather than the transfer.
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    /// First header value whose name matches `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Blocking HTTP facility used by `ZoomClient::fetch`.
///
/// Implementations return `Ok` for every response that carries a status code,
/// whatever that code is. `Err` is reserved for failures before a status is
/// obtained (DNS, connect, TLS, timeout).
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}
