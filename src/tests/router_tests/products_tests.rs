// src/tests/router_tests/products_tests.rs

use crate::router::{handle, respond};
use crate::tests::utils::{body_json, get, make_state};
use serde_json::{json, Value};

fn catalog() -> Value {
    json!([
        {
            "name": "Aurora",
            "popularityScore": 0.5,
            "weight": 2.0,
            "images": {"yellow": "aurora-y.jpg", "rose": "aurora-r.jpg", "white": ""}
        },
        {"name": "Lumen", "popularityScore": 0.9, "weight": 3.0},
        {"name": "Ghost", "weight": 1.0},
        {"name": "Petal", "popularityScore": 0.1, "weight": 1.0}
    ])
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn lists_priced_products_in_catalog_order() {
    let state = make_state(catalog(), Some(60.0));

    let resp = handle(get("/api/products"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(names(&body), ["Aurora", "Lumen", "Petal"]);
    assert_eq!(body[0]["price"], json!(180.0));
    assert_eq!(body[0]["popularityScore"], json!(0.5));
    assert_eq!(
        body[0]["images"],
        json!({"yellow": "aurora-y.jpg", "rose": "aurora-r.jpg"})
    );
    assert_eq!(body[1]["price"], json!(342.0)); // 1.9 * 3.0 * 60
    assert_eq!(body[2]["price"], json!(66.0)); // 1.1 * 1.0 * 60
}

#[test]
fn min_price_above_everything_is_empty_not_error() {
    let state = make_state(catalog(), Some(60.0));

    let resp = handle(get("/api/products?minPrice=400"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!([]));
}

#[test]
fn filters_combine_and_bounds_are_inclusive() {
    let state = make_state(catalog(), Some(60.0));

    let resp = handle(get("/api/products?maxPrice=180&minPopularity=0.5"), &state).unwrap();
    assert_eq!(names(&body_json(resp)), ["Aurora"]);

    let resp = handle(get("/api/products/?minPrice=180&maxPopularity=1"), &state).unwrap();
    assert_eq!(names(&body_json(resp)), ["Aurora", "Lumen"]);
}

#[test]
fn empty_query_values_are_ignored() {
    let state = make_state(catalog(), Some(60.0));

    let resp = handle(get("/api/products?minPrice=&maxPrice="), &state).unwrap();
    assert_eq!(names(&body_json(resp)).len(), 3);
}

#[test]
fn garbage_bound_is_400() {
    let state = make_state(catalog(), Some(60.0));

    let resp = respond(get("/api/products?minPrice=lots"), &state);
    assert_eq!(resp.status(), 400);
    let body = body_json(resp);
    assert!(body["error"].as_str().unwrap().contains("minPrice"));
}

#[test]
fn oracle_outage_is_503_for_any_filter() {
    let state = make_state(catalog(), None);

    for uri in ["/api/products", "/api/products?maxPrice=10"] {
        let resp = respond(get(uri), &state);
        assert_eq!(resp.status(), 503);
        assert_eq!(
            body_json(resp),
            json!({"error": "Gold price unavailable"})
        );
    }
}

#[test]
fn unknown_route_is_404_with_cors() {
    let state = make_state(catalog(), Some(60.0));

    let resp = respond(get("/api/rings"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
