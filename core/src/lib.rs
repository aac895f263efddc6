//! Reconciliation core for firewall zones managed over a device's REST API.
//!
//! # Overview
//! A zone groups interfaces under an intrazone traffic policy. The device
//! exposes one endpoint per zone table: POST upserts a zone, GET returns the
//! table, and there is no delete. Results come back in a loosely-typed JSON
//! envelope that reports failures as data, which `interpret` turns into a
//! precise outcome.
//!
//! # Design
//! - `ZoneClient` is stateless and never does I/O: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `ZoneController` runs those through any `Transport` and implements the
//!   upsert / read / delete lifecycle.
//! - `UreqTransport` is the blocking HTTP transport used against real
//!   devices, configured explicitly through `TransportConfig`.
//! - Wire types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod interpret;
pub mod transport;
pub mod types;

pub use client::{ZoneClient, ZONE_PATH};
pub use config::TransportConfig;
pub use controller::ZoneController;
pub use error::ZoneError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
pub use types::{Envelope, WriteOutcome, ZoneConfig, ZoneMember, ZonePayload, DEFAULT_INTRAZONE};
