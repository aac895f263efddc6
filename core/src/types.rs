//! Domain and wire types for the zone endpoint.
//!
//! # Design
//! `ZoneConfig` is the locally declared entity and uses the flat shape the
//! surrounding reconciliation framework speaks (`interface` is a list of
//! names). `ZonePayload` is the wire shape, where every member is wrapped in
//! an object. The two are kept apart so `codec` is the only place that knows
//! how to translate between them.
//!
//! `Envelope` is the generic wrapper the management API returns for every
//! request. Every field is optional at the schema level; the interpreter
//! decides which absences are protocol violations.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Intrazone policy applied when none is declared.
pub const DEFAULT_INTRAZONE: &str = "allow";

fn default_intrazone() -> String {
    DEFAULT_INTRAZONE.to_string()
}

/// A zone: a named group of interfaces sharing an intrazone traffic policy.
///
/// `name` is the remote object key and never changes once the zone exists.
/// Every other field is replaced wholesale on each upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `allow` or `deny`.
    #[serde(default = "default_intrazone")]
    pub intrazone: String,
    #[serde(rename = "interface", default)]
    pub interfaces: Vec<String>,
}

impl ZoneConfig {
    /// A zone with no description, no members and the default policy.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            intrazone: default_intrazone(),
            interfaces: Vec::new(),
        }
    }
}

/// One member of a zone as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneMember {
    #[serde(rename = "interface-name", default, deserialize_with = "null_as_default")]
    pub interface_name: String,
}

/// Zone object as sent in an upsert body and returned in `results`.
///
/// Fields missing from a response, or sent as `null`, decode to their zero
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ZonePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub intrazone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interface: Vec<ZoneMember>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The response wrapper shared by every management API object type.
///
/// The device encodes numbers as JSON floats in places, so `http_status` and
/// `error` accept any integral number. `vdom` and `mkey` are echo fields:
/// a number is kept in its text form and any other type is dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "echo_text")]
    pub vdom: Option<String>,
    #[serde(default, deserialize_with = "echo_text")]
    pub mkey: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "integral")]
    pub http_status: Option<u16>,
    #[serde(default, deserialize_with = "integral")]
    pub error: Option<i64>,
    /// Left untyped so a wrongly shaped array is reported precisely.
    pub results: Option<serde_json::Value>,
}

fn echo_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts `404` and `404.0` alike; fractional or out-of-range numbers are
/// rejected.
fn integral<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(n) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    n.as_i64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        })
        .and_then(|v| T::try_from(v).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected an integral status number, got {n}")))
}

/// Echo fields returned by a successful upsert. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub vdom: Option<String>,
    pub mkey: Option<String>,
    pub status: String,
    pub http_status: Option<u16>,
}
