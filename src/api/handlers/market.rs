//! Market overview and advisory handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    InsightDto, ListResponse, MarketOverviewResponse, PairDto, SignalDto, TrendingDto,
};
use crate::app_state::AppState;

/// `GET /market/overview` — Headline numbers.
#[utoipa::path(
    get,
    path = "/api/v1/market/overview",
    tag = "Market",
    summary = "Market overview",
    description = "Total market cap, 24h volume, and holders across every listed token.",
    responses(
        (status = 200, description = "Overview", body = MarketOverviewResponse),
    )
)]
pub async fn market_overview(State(state): State<AppState>) -> impl IntoResponse {
    Json(MarketOverviewResponse::from(state.market.overview().await))
}

/// `GET /insights` — AI commentary.
#[utoipa::path(
    get,
    path = "/api/v1/insights",
    tag = "Market",
    summary = "AI insights",
    responses(
        (status = 200, description = "Insights", body = ListResponse<InsightDto>),
    )
)]
pub async fn list_insights(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListResponse {
        data: state.market.insights().iter().map(InsightDto::from).collect(),
    })
}

/// `GET /signals` — AI trading signals.
#[utoipa::path(
    get,
    path = "/api/v1/signals",
    tag = "Market",
    summary = "AI trading signals",
    responses(
        (status = 200, description = "Signals", body = ListResponse<SignalDto>),
    )
)]
pub async fn list_signals(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListResponse {
        data: state.market.signals().iter().map(SignalDto::from).collect(),
    })
}

/// `GET /trending` — Social trending leaderboard.
#[utoipa::path(
    get,
    path = "/api/v1/trending",
    tag = "Market",
    summary = "Trending leaderboard",
    responses(
        (status = 200, description = "Leaderboard by rank", body = ListResponse<TrendingDto>),
    )
)]
pub async fn list_trending(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListResponse {
        data: state.market.trending().iter().map(TrendingDto::from).collect(),
    })
}

/// `GET /pairs` — Quoted trading pairs.
#[utoipa::path(
    get,
    path = "/api/v1/pairs",
    tag = "Market",
    summary = "Trading pairs",
    responses(
        (status = 200, description = "Pairs", body = ListResponse<PairDto>),
    )
)]
pub async fn list_pairs(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListResponse {
        data: state.market.pairs().iter().map(PairDto::from).collect(),
    })
}

/// Market routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/market/overview", get(market_overview))
        .route("/insights", get(list_insights))
        .route("/signals", get(list_signals))
        .route("/trending", get(list_trending))
        .route("/pairs", get(list_pairs))
}
