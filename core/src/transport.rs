//! Blocking `Transport` over ureq.
//!
//! Status codes are never treated as errors here: the management API puts
//! the real outcome in the JSON envelope, which `interpret` reads. Only a
//! failure to send the request or read the body is a `ZoneError::Transport`.

use std::time::Duration;

use ureq::tls::TlsConfig;
use ureq::Agent;

use crate::config::TransportConfig;
use crate::error::ZoneError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// HTTP client for the management API.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    api_token: Option<String>,
    retries: u32,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .tls_config(TlsConfig::builder().disable_verification(config.insecure).build())
            .build()
            .new_agent();

        Self {
            agent,
            api_token: config.api_token.clone(),
            retries: config.retries,
        }
    }

    fn send_once(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let auth = self.api_token.as_ref().map(|t| format!("Bearer {t}"));

        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.path);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                if let Some(auth) = &auth {
                    builder = builder.header("authorization", auth);
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.path);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                if let Some(auth) = &auth {
                    builder = builder.header("authorization", auth);
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.body_mut().read_to_vec()?;

        Ok(HttpResponse { status, headers, body })
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ZoneError> {
        let mut attempt = 0;
        loop {
            tracing::debug!("{} {} (attempt {})", request.method.as_str(), request.path, attempt + 1);
            match self.send_once(request) {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.retries => {
                    tracing::warn!("request to {} failed: {e}, retrying", request.path);
                    attempt += 1;
                }
                Err(e) => {
                    return Err(ZoneError::Transport(format!(
                        "{} {}: {e}",
                        request.method.as_str(),
                        request.path
                    )))
                }
            }
        }
    }
}
