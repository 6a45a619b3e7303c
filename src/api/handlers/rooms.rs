//! Pump-room handlers: list, create, join, invest.
//!
//! Action endpoints always carry the user-facing notification: inside the
//! body on success, in `error.details` on failure.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    InvestRequest, RoomActionResponse, RoomDto, RoomListParams, RoomListResponse,
};
use crate::app_state::AppState;
use crate::domain::{PumpRoom, RoomId};
use crate::error::{ErrorResponse, MarketError};
use crate::service::{NewRoom, Notification};
use crate::view::filter::RoomFilter;
use crate::view::format::format_count;

/// Renders an action outcome with its notification.
fn action_response(
    status: StatusCode,
    result: Result<PumpRoom, MarketError>,
    notification: Notification,
    joined: bool,
) -> Response {
    match result {
        Ok(room) => (
            status,
            Json(RoomActionResponse {
                room: RoomDto::new(room, joined),
                notification,
            }),
        )
            .into_response(),
        Err(err) => err.into_response_with_details(notification.message),
    }
}

/// `GET /rooms` — Room list.
///
/// # Errors
///
/// Returns [`MarketError::InvalidRequest`] for an unknown filter.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    summary = "List pump rooms",
    description = "Lists rooms matching the filter. `joined` is empty while signed out.",
    params(RoomListParams),
    responses(
        (status = 200, description = "Matching rooms", body = RoomListResponse),
        (status = 400, description = "Unknown filter", body = ErrorResponse),
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomListParams>,
) -> Result<impl IntoResponse, MarketError> {
    let filter: RoomFilter = params
        .filter
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or_default();

    let rooms = state.rooms.list_rooms(filter).await;
    let joined = state.rooms.joined_rooms().await;
    let total_members = state.rooms.total_members().await;

    let data = rooms
        .into_iter()
        .map(|room| {
            let is_joined = joined.contains(&room.id);
            RoomDto::new(room, is_joined)
        })
        .collect();

    Ok(Json(RoomListResponse {
        data,
        total_members,
        total_members_display: format_count(total_members),
    }))
}

/// `POST /rooms` — Create a room.
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    summary = "Create a pump room",
    description = "Opens a new active room for a listed token. Settles after a simulated delay.",
    request_body = NewRoom,
    responses(
        (status = 201, description = "Room created", body = RoomActionResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse),
        (status = 502, description = "Settlement failed", body = ErrorResponse),
    )
)]
pub async fn create_room(State(state): State<AppState>, Json(form): Json<NewRoom>) -> Response {
    let result = state.rooms.create_room(form).await;
    let notification = Notification::for_room_creation(&result);
    action_response(StatusCode::CREATED, result, notification, false)
}

/// `POST /rooms/{id}/join` — Join a room.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/join",
    tag = "Rooms",
    summary = "Join a pump room",
    description = "Adds one member to the room. Settles after a simulated delay.",
    params(
        ("id" = String, Path, description = "Room identifier"),
    ),
    responses(
        (status = 200, description = "Joined", body = RoomActionResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 502, description = "Settlement failed", body = ErrorResponse),
    )
)]
pub async fn join_room(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = state.rooms.join(&RoomId::from(id)).await;
    let notification = Notification::for_join(&result);
    action_response(StatusCode::OK, result, notification, true)
}

/// `POST /rooms/{id}/invest` — Invest in a room.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/invest",
    tag = "Rooms",
    summary = "Invest in a pump room",
    description = "Adds a positive USD amount to the room total. Settles after a simulated delay.",
    params(
        ("id" = String, Path, description = "Room identifier"),
    ),
    request_body = InvestRequest,
    responses(
        (status = 200, description = "Invested", body = RoomActionResponse),
        (status = 400, description = "Invalid amount", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 502, description = "Settlement failed", body = ErrorResponse),
    )
)]
pub async fn invest_in_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<InvestRequest>,
) -> Response {
    let room_id = RoomId::from(id);
    // A missing amount fails the same positivity check as a bad one.
    let amount = req.amount.unwrap_or(f64::NAN);
    let result = state.rooms.invest(&room_id, amount).await;
    let notification = Notification::for_investment(amount, &result);
    let joined = state.rooms.joined_rooms().await.contains(&room_id);
    action_response(StatusCode::OK, result, notification, joined)
}

/// Room routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{id}/join", post(join_room))
        .route("/rooms/{id}/invest", post(invest_in_room))
}
