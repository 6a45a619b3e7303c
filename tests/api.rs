//! End-to-end tests of the REST surface against seeded state.

#![allow(clippy::panic)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use quantumx_market::api;
use quantumx_market::app_state::AppState;
use quantumx_market::config::MarketConfig;
use quantumx_market::seed;

fn app() -> Router {
    let config = MarketConfig::default().without_latency();
    let Ok(state) = AppState::from_seed(&config, seed::load()) else {
        panic!("seed must load");
    };
    api::build_router().with_state(state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("valid request");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router is infallible");
    };
    let status = response.status();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("readable body");
    };
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_seeded_tokens() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tokens"], 6);
    assert_eq!(body["ticks"], 0);
}

#[tokio::test]
async fn token_list_applies_query() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::GET,
        "/api/v1/tokens?category=verified&sort=market_cap",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["data"][0]["id"], "atom");

    let (status, body) = call(&app, Method::GET, "/api/v1/tokens?search=akash", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["symbol"], "AKT");
}

#[tokio::test]
async fn unknown_sort_key_is_rejected() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/v1/tokens?sort=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["code"].is_u64());
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/v1/tokens/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        body["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("ghost"))
    );
}

#[tokio::test]
async fn token_detail_flattens_card() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/v1/tokens/atom", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "atom");
    assert_eq!(body["blockchain"], "cosmos");
}

#[tokio::test]
async fn join_requires_sign_in() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/api/v1/rooms/room-1/join", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"]["details"],
        "Please connect your wallet to join rooms"
    );

    let (status, _) = call(&app, Method::POST, "/api/v1/auth/login", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::POST, "/api/v1/rooms/room-1/join", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["room"]["member_count"], 1248);
    assert_eq!(body["room"]["joined"], true);
    assert_eq!(body["notification"]["level"], "success");

    let (_, body) = call(&app, Method::GET, "/api/v1/rooms?filter=joined", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn invalid_investment_leaves_room_untouched() {
    let app = app();
    call(&app, Method::POST, "/api/v1/auth/login", None).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/rooms/room-1/invest",
        Some(serde_json::json!({ "amount": -5.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        "Please enter a valid investment amount"
    );

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/rooms/room-1/invest",
        Some(serde_json::json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call(&app, Method::GET, "/api/v1/rooms", None).await;
    let Some(rooms) = body["data"].as_array() else {
        panic!("room list");
    };
    let Some(room) = rooms.iter().find(|r| r["id"] == "room-1") else {
        panic!("room-1 is seeded");
    };
    assert_eq!(room["total_invested"], 67_500.0);
}

#[tokio::test]
async fn signed_out_negative_investment_is_bad_request() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/rooms/room-1/invest",
        Some(serde_json::json!({ "amount": -5.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        "Please enter a valid investment amount"
    );
}

#[tokio::test]
async fn portfolio_follows_session() {
    let app = app();
    let (status, _) = call(&app, Method::GET, "/api/v1/portfolio", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    call(&app, Method::POST, "/api/v1/auth/login", None).await;
    let (status, body) = call(&app, Method::GET, "/api/v1/portfolio", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holdings"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["unpriced_holding_ids"].as_array().map(Vec::len), Some(0));

    let (_, body) = call(&app, Method::POST, "/api/v1/auth/logout", None).await;
    assert_eq!(body["is_authenticated"], false);
    let (status, _) = call(&app, Method::GET, "/api/v1/portfolio", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_room_validates_fields() {
    let app = app();
    call(&app, Method::POST, "/api/v1/auth/login", None).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/rooms",
        Some(serde_json::json!({ "name": "Moon", "description": "up" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["details"],
        "Please fill in all required fields"
    );

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/rooms",
        Some(serde_json::json!({
            "name": "Osmo Surge",
            "description": "Pool party",
            "token_id": "osmo",
            "target_amount": 10000.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["room"]["member_count"], 0);
    assert_eq!(body["room"]["is_active"], true);
}

#[tokio::test]
async fn advisory_lists_are_served() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/v1/pairs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "ATOM/USDT");

    let (status, body) = call(&app, Method::GET, "/api/v1/market/overview", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_count"], 6);
}
