//! Portfolio handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::PortfolioResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, MarketError};

/// `GET /portfolio` — Signed-in user's portfolio at current prices.
///
/// # Errors
///
/// Returns [`MarketError::AuthenticationRequired`] when signed out.
#[utoipa::path(
    get,
    path = "/api/v1/portfolio",
    tag = "Portfolio",
    summary = "Get portfolio",
    responses(
        (status = 200, description = "Portfolio summary", body = PortfolioResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, MarketError> {
    let summary = state.portfolio.summary().await?;
    Ok(Json(PortfolioResponse::from(summary)))
}

/// `POST /portfolio/refresh` — Simulated refresh.
///
/// # Errors
///
/// Returns [`MarketError::AuthenticationRequired`] when signed out.
#[utoipa::path(
    post,
    path = "/api/v1/portfolio/refresh",
    tag = "Portfolio",
    summary = "Refresh portfolio",
    description = "Waits a simulated round-trip, then returns the portfolio summary.",
    responses(
        (status = 200, description = "Portfolio summary", body = PortfolioResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
pub async fn refresh_portfolio(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, MarketError> {
    let summary = state.portfolio.refresh().await?;
    Ok(Json(PortfolioResponse::from(summary)))
}

/// Portfolio routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/refresh", post(refresh_portfolio))
}
