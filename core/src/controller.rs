//! Resource controller for zones.
//!
//! # Design
//! The remote zone is either absent or present. `upsert` is the only remote
//! transition: one POST creates or fully replaces the zone, after which the
//! zone is read back so the caller always stores what the device actually
//! holds. `read` reports a missing zone as `Ok(None)` so the caller can drop
//! it from local state.
//!
//! `delete` never reaches the network. The management API has no delete
//! for zones, so the zone stays present on the device and only local
//! knowledge of it is discarded.

use crate::client::ZoneClient;
use crate::config::TransportConfig;
use crate::error::ZoneError;
use crate::http::Transport;
use crate::transport::UreqTransport;
use crate::types::ZoneConfig;

/// Drives `ZoneClient` over a `Transport`.
#[derive(Clone)]
pub struct ZoneController<T> {
    client: ZoneClient,
    transport: T,
}

impl ZoneController<UreqTransport> {
    /// Controller talking to a real device.
    pub fn from_config(config: &TransportConfig) -> Self {
        let mut client = ZoneClient::new(&config.base_url);
        if let Some(vdom) = &config.vdom {
            client = client.with_vdom(vdom);
        }
        Self::new(client, UreqTransport::new(config))
    }
}

impl<T: Transport> ZoneController<T> {
    pub fn new(client: ZoneClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Create or fully replace the zone, then return it as read back from
    /// the device.
    pub fn upsert(&self, desired: &ZoneConfig) -> Result<ZoneConfig, ZoneError> {
        let request = self.client.build_upsert_zone(desired)?;
        let response = self.transport.send(&request)?;
        let outcome = self.client.parse_upsert_zone(response)?;
        tracing::info!(
            zone = %desired.name,
            mkey = outcome.mkey.as_deref().unwrap_or(""),
            vdom = outcome.vdom.as_deref().unwrap_or(""),
            "zone upserted"
        );

        self.read(&desired.name)?.ok_or_else(|| {
            ZoneError::Protocol(format!("zone {} not found after upsert", desired.name))
        })
    }

    /// Fetch the zone. `Ok(None)` means it does not exist on the device.
    pub fn read(&self, name: &str) -> Result<Option<ZoneConfig>, ZoneError> {
        let request = self.client.build_read_zone(name);
        let response = self.transport.send(&request)?;
        let zone = self.client.parse_read_zone(response)?;
        if zone.is_none() {
            tracing::warn!("zone ({name}) not found, removing from state");
        }
        Ok(zone)
    }

    /// Forget the zone locally. Always succeeds without a request; the zone
    /// remains on the device.
    pub fn delete(&self, name: &str) {
        tracing::warn!("zone ({name}) has no delete API, leaving it on the device");
    }
}
