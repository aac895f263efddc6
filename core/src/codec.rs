//! Translation between the declared zone and its wire payload.
//!
//! The declared side lists interfaces as plain names; the wire wraps each
//! name in a `{"interface-name": ...}` object. Order is preserved in both
//! directions and duplicates are passed through untouched.

use crate::error::ZoneError;
use crate::types::{ZoneConfig, ZoneMember, ZonePayload};

/// Wrap each interface name in a wire member, preserving order.
///
/// Fails with `ZoneError::Validation` if any name is empty.
pub fn collapse(names: &[String]) -> Result<Vec<ZoneMember>, ZoneError> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.is_empty() {
                return Err(ZoneError::Validation(format!("interface entry {idx} is empty")));
            }
            Ok(ZoneMember {
                interface_name: name.clone(),
            })
        })
        .collect()
}

/// Unwrap wire members back into interface names, preserving order.
pub fn expand(members: &[ZoneMember]) -> Vec<String> {
    members.iter().map(|m| m.interface_name.clone()).collect()
}

/// Build the upsert body for a declared zone.
pub fn to_payload(zone: &ZoneConfig) -> Result<ZonePayload, ZoneError> {
    if zone.name.is_empty() {
        return Err(ZoneError::Validation("zone name is empty".to_string()));
    }
    Ok(ZonePayload {
        name: zone.name.clone(),
        description: zone.description.clone(),
        intrazone: zone.intrazone.clone(),
        interface: collapse(&zone.interfaces)?,
    })
}

/// Canonical entity state for a zone read back from the device.
pub fn from_payload(payload: ZonePayload) -> ZoneConfig {
    let interfaces = expand(&payload.interface);
    ZoneConfig {
        name: payload.name,
        description: payload.description,
        intrazone: payload.intrazone,
        interfaces,
    }
}
