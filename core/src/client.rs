//! Stateless HTTP request builder and response parser for the zone endpoint.
//!
//! # Design
//! `ZoneClient` holds only a `base_url` and an optional VDOM and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip, keeping the client deterministic and free of I/O.
//!
//! The management API exposes a single endpoint for zones: a POST creates
//! or fully replaces the zone named in the body, and a GET returns the zone
//! table. There is no delete.

use crate::codec;
use crate::error::ZoneError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::interpret;
use crate::types::{WriteOutcome, ZoneConfig};

/// Path of the zone table on the management API.
pub const ZONE_PATH: &str = "/api/v2/cmdb/system/zone";

/// Maximum length of response body to log.
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Synchronous, stateless client for the zone endpoint.
#[derive(Debug, Clone)]
pub struct ZoneClient {
    base_url: String,
    vdom: Option<String>,
}

impl ZoneClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            vdom: None,
        }
    }

    /// Scope every request to a virtual domain.
    pub fn with_vdom(mut self, vdom: &str) -> Self {
        self.vdom = Some(vdom.to_string());
        self
    }

    fn url(&self) -> String {
        match &self.vdom {
            Some(vdom) => format!("{}{ZONE_PATH}?vdom={}", self.base_url, urlencoding::encode(vdom)),
            None => format!("{}{ZONE_PATH}", self.base_url),
        }
    }

    /// Build the upsert request. Fails before anything is sent if the zone
    /// has an empty name or an empty interface entry.
    pub fn build_upsert_zone(&self, zone: &ZoneConfig) -> Result<HttpRequest, ZoneError> {
        let payload = codec::to_payload(zone)?;
        let body = serde_json::to_string(&payload).map_err(|e| ZoneError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Build the read request. The endpoint path is fixed; `name` only
    /// labels the request in logs.
    pub fn build_read_zone(&self, name: &str) -> HttpRequest {
        tracing::debug!(zone = name, "building zone read");
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_upsert_zone(&self, response: HttpResponse) -> Result<WriteOutcome, ZoneError> {
        log_response("upsert", &response);
        interpret::interpret_write(interpret::parse_envelope(&response.body)?)
    }

    /// Parse a read response. `Ok(None)` means the zone does not exist.
    pub fn parse_read_zone(&self, response: HttpResponse) -> Result<Option<ZoneConfig>, ZoneError> {
        log_response("read", &response);
        let payload = interpret::interpret_read(interpret::parse_envelope(&response.body)?)?;
        Ok(payload.map(codec::from_payload))
    }
}

fn log_response(op: &str, response: &HttpResponse) {
    tracing::debug!(
        op,
        status = response.status,
        "zone response: {}",
        sanitize_for_log(&String::from_utf8_lossy(&response.body))
    );
}

/// Truncate long bodies and strip control characters before logging.
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };
    truncated.replace(|c: char| c.is_control(), "")
}
