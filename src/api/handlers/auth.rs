//! Session handlers for the sign-in stub.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::SessionResponse;
use crate::app_state::AppState;

/// `GET /auth/session` — Current session.
#[utoipa::path(
    get,
    path = "/api/v1/auth/session",
    tag = "Auth",
    summary = "Current session",
    responses(
        (status = 200, description = "Session state", body = SessionResponse),
    )
)]
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    Json(SessionResponse::from_user(state.auth.user().await))
}

/// `POST /auth/login` — Sign in as the demo user.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    summary = "Sign in",
    description = "Signs in the demo account. No credentials are checked.",
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
    )
)]
pub async fn login(State(state): State<AppState>) -> impl IntoResponse {
    let user = state.auth.login().await;
    Json(SessionResponse::from_user(Some(user)))
}

/// `POST /auth/logout` — Sign out.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Auth",
    summary = "Sign out",
    responses(
        (status = 200, description = "Signed out", body = SessionResponse),
    )
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.auth.logout().await;
    Json(SessionResponse::from_user(None))
}

/// Auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/session", get(get_session))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}
