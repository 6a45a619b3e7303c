//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api/v1`, except `/health`. With the
//! `swagger-ui` feature the OpenAPI document is served at
//! `/api-docs/openapi.json` and browsable at `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "QuantumX Market API",
        description = "Token explorer, pump rooms, and portfolio view over simulated market data."
    ),
    paths(
        handlers::system::health_handler,
        handlers::tokens::list_tokens,
        handlers::tokens::trending_tokens,
        handlers::tokens::get_token,
        handlers::market::market_overview,
        handlers::market::list_insights,
        handlers::market::list_signals,
        handlers::market::list_trending,
        handlers::market::list_pairs,
        handlers::rooms::list_rooms,
        handlers::rooms::create_room,
        handlers::rooms::join_room,
        handlers::rooms::invest_in_room,
        handlers::portfolio::get_portfolio,
        handlers::portfolio::refresh_portfolio,
        handlers::auth::get_session,
        handlers::auth::login,
        handlers::auth::logout,
    ),
    tags(
        (name = "System", description = "Health"),
        (name = "Tokens", description = "Token explorer"),
        (name = "Market", description = "Overview and AI advisory data"),
        (name = "Rooms", description = "Pump rooms"),
        (name = "Portfolio", description = "Holdings of the signed-in user"),
        (name = "Auth", description = "Sign-in stub"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());
    with_docs(router)
}

#[cfg(feature = "swagger-ui")]
fn with_docs(router: Router<AppState>) -> Router<AppState> {
    router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn with_docs(router: Router<AppState>) -> Router<AppState> {
    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/tokens",
            "/api/v1/tokens/{id}",
            "/api/v1/rooms/{id}/invest",
            "/api/v1/portfolio/refresh",
            "/api/v1/auth/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
