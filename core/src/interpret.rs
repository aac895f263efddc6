//! Response interpreter for the management API envelope.
//!
//! # Design
//! The envelope is decoded into a typed schema in which every field is
//! optional, then checked rule by rule. Envelope-level absences (`status`,
//! `http_status` on reads, `results` on successful reads) are protocol
//! violations. Payload-level absences are not: a zone missing `description`
//! simply decodes with an empty description.
//!
//! Read rules, in order:
//! 1. no `http_status` -> `Protocol("missing http_status")`
//! 2. `http_status == 404` -> absent, whatever else the envelope says
//! 3. no `status` -> `Protocol("missing status")`
//! 4. `status != "success"` -> `RemoteFailure`
//! 5. `results` must be a non-empty array; the first element is the zone
//!
//! Writes apply rules 3 and 4 only and copy the echo fields as-is.

use serde::Deserialize;

use crate::error::ZoneError;
use crate::types::{Envelope, WriteOutcome, ZonePayload};

const STATUS_SUCCESS: &str = "success";
const HTTP_NOT_FOUND: u16 = 404;

/// Decode a raw response body into an `Envelope`.
pub fn parse_envelope(body: &[u8]) -> Result<Envelope, ZoneError> {
    serde_json::from_slice(body).map_err(|e| ZoneError::Protocol(format!("malformed envelope: {e}")))
}

/// Interpret the envelope of a read. `Ok(None)` means the zone does not
/// exist on the device.
pub fn interpret_read(envelope: Envelope) -> Result<Option<ZonePayload>, ZoneError> {
    let Some(http_status) = envelope.http_status else {
        return Err(ZoneError::Protocol("missing http_status".to_string()));
    };
    if http_status == HTTP_NOT_FOUND {
        return Ok(None);
    }
    check_status(&envelope)?;

    let first = envelope
        .results
        .as_ref()
        .and_then(|results| results.as_array())
        .and_then(|results| results.first())
        .filter(|first| first.is_object())
        .ok_or_else(cannot_get_results)?;
    let payload = ZonePayload::deserialize(first).map_err(|e| {
        tracing::debug!("zone payload rejected: {e}");
        cannot_get_results()
    })?;
    Ok(Some(payload))
}

/// Interpret the envelope of an upsert.
pub fn interpret_write(envelope: Envelope) -> Result<WriteOutcome, ZoneError> {
    let status = check_status(&envelope)?.to_string();
    Ok(WriteOutcome {
        vdom: envelope.vdom,
        mkey: envelope.mkey,
        status,
        http_status: envelope.http_status,
    })
}

/// Require a `status` field and map anything but `success` to a failure.
fn check_status(envelope: &Envelope) -> Result<&str, ZoneError> {
    let Some(status) = envelope.status.as_deref() else {
        return Err(ZoneError::Protocol("missing status".to_string()));
    };
    if status != STATUS_SUCCESS {
        let err = ZoneError::RemoteFailure {
            status: status.to_string(),
            error: envelope.error,
            http_status: envelope.http_status,
        };
        tracing::error!("{err}");
        return Err(err);
    }
    Ok(status)
}

fn cannot_get_results() -> ZoneError {
    ZoneError::Protocol("cannot get results".to_string())
}
