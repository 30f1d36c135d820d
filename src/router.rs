use crate::domain::Filter;
use crate::engine::CatalogEngine;
use crate::errors::ServerError;
use crate::responses::{error_to_response, json_response, with_cors, ResultResp};
use astra::{Request, Response};
use serde_json::json;
use std::collections::HashMap;

const PRODUCTS_PATH: &str = "/api/products";

/// Everything a request handler needs, shared by all workers.
pub struct AppState {
    pub engine: CatalogEngine,
    pub cors_origin: Option<String>,
}

/// Route, handle, and turn errors into responses.
pub fn respond(req: Request, state: &AppState) -> Response {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %path, error = %err, "request failed");
            error_to_response(err)
        }
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request handled");
    with_cors(resp, state.cors_origin.as_deref())
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().trim_end_matches('/');

    match (method, path) {
        ("GET", PRODUCTS_PATH) => {
            let filter = parse_filter(&parse_query(&req))?;
            let items = state.engine.list_items(Some(&filter))?;
            json_response(200, &items)
        }
        ("GET", p) if p.starts_with("/api/products/") => {
            let raw = &p[PRODUCTS_PATH.len() + 1..];
            if raw.contains('/') {
                return Err(ServerError::NotFound);
            }

            let name = urlencoding::decode(raw)
                .map_err(|_| ServerError::BadRequest("product name is not valid UTF-8".into()))?;

            match state.engine.get_item_by_name(&name)? {
                Some(item) => json_response(200, &item),
                None => json_response(200, &json!({ "message": "Product not found" })),
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}

/// Build a filter from query parameters. Missing or blank values are
/// treated as "no bound"; anything else must be a finite number.
fn parse_filter(params: &HashMap<String, String>) -> Result<Filter, ServerError> {
    let bound = |key: &str| -> Result<Option<f64>, ServerError> {
        match params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(v) => v
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| ServerError::BadRequest(format!("{key} must be a number, got {v:?}"))),
        }
    };

    Ok(Filter {
        min_price: bound("minPrice")?,
        max_price: bound("maxPrice")?,
        min_popularity: bound("minPopularity")?,
        max_popularity: bound("maxPopularity")?,
    })
}
