//! Error types for the zone reconciliation core.
//!
//! # Design
//! The management API reports failures as data inside a JSON envelope rather
//! than through HTTP status codes, so errors are classified by where they are
//! detected: local input (`Validation`), the wire (`Transport`), the shape of
//! the envelope (`Protocol`), or an envelope that is well-formed but reports
//! non-success (`RemoteFailure`). A missing remote object is not an error;
//! reads surface it as `None`.

use std::fmt;

use thiserror::Error;

/// Errors returned by `ZoneClient` and `ZoneController`.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// Malformed local input, detected before any request is sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request could not be sent or the response body could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response envelope does not have the required shape.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The envelope is well-formed but reports a non-success status.
    ///
    /// The message phrasing matches the diagnostics historically emitted by
    /// the management API client.
    #[error(
        "status is {status} and error no is {} and http_status no is {}",
        Marker(.error),
        Marker(.http_status)
    )]
    RemoteFailure {
        status: String,
        error: Option<i64>,
        http_status: Option<u16>,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Displays the wrapped number, or `not found` when absent.
struct Marker<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Marker<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failure_message_includes_all_parts() {
        let err = ZoneError::RemoteFailure {
            status: "failure".to_string(),
            error: Some(5),
            http_status: Some(500),
        };
        assert_eq!(
            err.to_string(),
            "status is failure and error no is 5 and http_status no is 500"
        );
    }

    #[test]
    fn remote_failure_message_marks_missing_codes() {
        let err = ZoneError::RemoteFailure {
            status: "error".to_string(),
            error: None,
            http_status: None,
        };
        assert_eq!(
            err.to_string(),
            "status is error and error no is not found and http_status no is not found"
        );
    }

    #[test]
    fn remote_failure_message_keeps_negative_codes() {
        let err = ZoneError::RemoteFailure {
            status: "error".to_string(),
            error: Some(-651),
            http_status: Some(500),
        };
        assert!(err.to_string().contains("error no is -651"));
    }

    #[test]
    fn protocol_message_is_prefixed() {
        let err = ZoneError::Protocol("missing status".to_string());
        assert_eq!(err.to_string(), "protocol violation: missing status");
    }
}
