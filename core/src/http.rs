//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `ZoneClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; a `Transport` implementation executes the
//! actual round-trip. `ZoneController` ties the two together.
//!
//! All fields use owned types so a response can outlive the connection it
//! was read from.

use crate::error::ZoneError;

/// HTTP method for a request.
///
/// The zone endpoint only accepts reads and upserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ZoneClient::build_*` methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw bytes exactly as read from the wire. The HTTP status
/// is informational only; the management API reports the real outcome in
/// the JSON envelope.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Executes an `HttpRequest` and returns the fully-read response.
///
/// Implementations must read the body to completion before returning, so no
/// connection state outlives the call. Failures to send or read are reported
/// as `ZoneError::Transport`; non-2xx statuses are returned as data.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ZoneError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ZoneError> {
        (**self).send(request)
    }
}
