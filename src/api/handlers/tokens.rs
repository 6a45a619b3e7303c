//! Token explorer handlers: list, trending tab, detail.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{TokenDetailResponse, TokenListParams, TokenListResponse};
use crate::app_state::AppState;
use crate::domain::TokenId;
use crate::error::{ErrorResponse, MarketError};

/// `GET /tokens` — Filtered, sorted token list.
///
/// # Errors
///
/// Returns [`MarketError::InvalidRequest`] for an unknown category or sort
/// key.
#[utoipa::path(
    get,
    path = "/api/v1/tokens",
    tag = "Tokens",
    summary = "List tokens",
    description = "Searches by name or symbol, filters by category, then sorts descending by the chosen key.",
    params(TokenListParams),
    responses(
        (status = 200, description = "Matching tokens", body = TokenListResponse),
        (status = 400, description = "Unknown category or sort key", body = ErrorResponse),
    )
)]
pub async fn list_tokens(
    State(state): State<AppState>,
    Query(params): Query<TokenListParams>,
) -> Result<impl IntoResponse, MarketError> {
    let query = params.into_query()?;
    let tokens = state.market.list_tokens(&query).await;
    Ok(Json(TokenListResponse::from_tokens(&tokens)))
}

/// `GET /tokens/trending` — Landing-page trending tab.
#[utoipa::path(
    get,
    path = "/api/v1/tokens/trending",
    tag = "Tokens",
    summary = "Trending tab",
    description = "Up to six tokens with more than $50M of 24h volume, in listing order.",
    responses(
        (status = 200, description = "Trending tokens", body = TokenListResponse),
    )
)]
pub async fn trending_tokens(State(state): State<AppState>) -> impl IntoResponse {
    let tokens = state.market.trending_tab().await;
    Json(TokenListResponse::from_tokens(&tokens))
}

/// `GET /tokens/{id}` — Token detail.
///
/// # Errors
///
/// Returns [`MarketError::TokenNotFound`] if the token is not listed.
#[utoipa::path(
    get,
    path = "/api/v1/tokens/{id}",
    tag = "Tokens",
    summary = "Get token details",
    params(
        ("id" = String, Path, description = "Token identifier, e.g. `atom`"),
    ),
    responses(
        (status = 200, description = "Token details", body = TokenDetailResponse),
        (status = 404, description = "Token not found", body = ErrorResponse),
    )
)]
pub async fn get_token(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, MarketError> {
    let token = state.market.token(&TokenId::from(id)).await?;
    Ok(Json(TokenDetailResponse::from(token)))
}

/// Token routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tokens", get(list_tokens))
        .route("/tokens/trending", get(trending_tokens))
        .route("/tokens/{id}", get(get_token))
}
