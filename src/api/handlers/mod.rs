//! REST endpoint handlers organized by resource.

pub mod auth;
pub mod market;
pub mod portfolio;
pub mod rooms;
pub mod system;
pub mod tokens;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(tokens::routes())
        .merge(market::routes())
        .merge(rooms::routes())
        .merge(portfolio::routes())
        .merge(auth::routes())
}
