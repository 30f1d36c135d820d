use crate::catalog::JsonFileCatalog;
use crate::engine::{CatalogEngine, EngineConfig};
use crate::oracle::{OracleError, PriceOracle};
use crate::router::AppState;
use serde_json::Value;
use astra::{Body, Request, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static CATALOG_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Oracle that answers with a fixed per-gram price, or fails.
pub struct StubOracle(pub Option<f64>);

impl PriceOracle for StubOracle {
    fn fetch_unit_price(&self) -> Result<f64, OracleError> {
        self.0
            .ok_or_else(|| OracleError::Network("stubbed outage".into()))
    }
}

/// Write `records` to a fresh temp file and build app state around it.
pub fn make_state(records: Value, unit_price: Option<f64>) -> AppState {
    let path = std::env::temp_dir().join(format!(
        "products_test_{}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        CATALOG_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::write(&path, records.to_string()).expect("Failed to write catalog");

    AppState {
        engine: CatalogEngine::new(EngineConfig {
            catalog: Box::new(JsonFileCatalog::new(path)),
            oracle: Box::new(StubOracle(unit_price)),
        }),
        cors_origin: Some("*".to_string()),
    }
}

/// Read a response body as JSON.
pub fn body_json(mut resp: Response) -> Value {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
