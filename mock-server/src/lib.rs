use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const ZONE_PATH: &str = "/api/v2/cmdb/system/zone";

/// Error numbers the device reports in the `error` field.
pub const ERR_INVALID_BODY: i64 = -1;
pub const ERR_MISSING_NAME: i64 = -5;
pub const ERR_INVALID_INTRAZONE: i64 = -651;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    #[serde(rename = "interface-name")]
    pub interface_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Zone {
    pub name: String,
    pub description: String,
    pub intrazone: String,
    pub interface: Vec<Member>,
}

#[derive(Deserialize)]
pub struct VdomQuery {
    pub vdom: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<String, Zone>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route(ZONE_PATH, get(list_zones).post(upsert_zone))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn vdom_of(query: &VdomQuery) -> &str {
    query.vdom.as_deref().unwrap_or("root")
}

fn failure(code: StatusCode, vdom: &str, error: i64) -> (StatusCode, Json<Value>) {
    (
        code,
        Json(json!({
            "http_method": "POST",
            "status": "error",
            "http_status": code.as_u16(),
            "error": error,
            "vdom": vdom,
        })),
    )
}

async fn list_zones(State(db): State<Db>, Query(query): Query<VdomQuery>) -> (StatusCode, Json<Value>) {
    let vdom = vdom_of(&query);
    let zones = db.read().await;
    if zones.is_empty() {
        tracing::debug!(vdom, "zone table empty");
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "http_method": "GET",
                "status": "error",
                "http_status": 404,
                "vdom": vdom,
            })),
        );
    }
    let results: Vec<&Zone> = zones.values().collect();
    (
        StatusCode::OK,
        Json(json!({
            "http_method": "GET",
            "results": results,
            "vdom": vdom,
            "path": "system",
            "name": "zone",
            "status": "success",
            "http_status": 200,
        })),
    )
}

async fn upsert_zone(
    State(db): State<Db>,
    Query(query): Query<VdomQuery>,
    payload: Result<Json<Zone>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let vdom = vdom_of(&query);
    let Ok(Json(mut zone)) = payload else {
        return failure(StatusCode::BAD_REQUEST, vdom, ERR_INVALID_BODY);
    };
    if zone.name.is_empty() {
        return failure(StatusCode::INTERNAL_SERVER_ERROR, vdom, ERR_MISSING_NAME);
    }
    match zone.intrazone.as_str() {
        "" => zone.intrazone = "allow".to_string(),
        "allow" | "deny" => {}
        _ => return failure(StatusCode::INTERNAL_SERVER_ERROR, vdom, ERR_INVALID_INTRAZONE),
    }

    let mkey = zone.name.clone();
    tracing::info!(vdom, zone = %mkey, members = zone.interface.len(), "zone stored");
    db.write().await.insert(mkey.clone(), zone);
    (
        StatusCode::OK,
        Json(json!({
            "http_method": "POST",
            "revision": "1",
            "mkey": mkey,
            "status": "success",
            "http_status": 200,
            "vdom": vdom,
        })),
    )
}
