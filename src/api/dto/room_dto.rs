//! Pump-room DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::PumpRoom;
use crate::service::Notification;
use crate::view::format::{format_count, format_progress, format_usd};

/// Query parameters of `GET /rooms`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomListParams {
    /// `all`, `trending`, `new`, or `joined`. Defaults to `all`.
    #[serde(default)]
    pub filter: Option<String>,
}

/// Request body for `POST /rooms/{id}/invest`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InvestRequest {
    /// Amount to pledge in USD; must be positive.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A pump-room card.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoomDto {
    /// Room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Pitch text.
    pub description: String,
    /// Cover image URL.
    pub image_url: String,
    /// Token the room is pumping.
    pub token_id: String,
    /// Creator account.
    pub creator_id: String,
    /// Funding goal in USD.
    pub target_amount: f64,
    /// Formatted goal (`"$100,000.00"`).
    pub target_display: String,
    /// Total pledged in USD.
    pub total_invested: f64,
    /// Formatted total (`"$67,500.00"`).
    pub invested_display: String,
    /// Progress toward the goal in percent; absent without a goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<f64>,
    /// Formatted progress (`"67.5%"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_display: Option<String>,
    /// Number of members.
    pub member_count: u64,
    /// Formatted member count (`"1,247"`).
    pub members_display: String,
    /// Whether the campaign is open.
    pub is_active: bool,
    /// Whether the signed-in user joined this room.
    pub joined: bool,
    /// Campaign end.
    pub end_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl RoomDto {
    /// Builds the card for `room`.
    #[must_use]
    pub fn new(room: PumpRoom, joined: bool) -> Self {
        let progress = room.progress_percentage();
        Self {
            id: room.id.to_string(),
            target_display: format_usd(room.target_amount),
            invested_display: format_usd(room.total_invested),
            progress_percentage: progress,
            progress_display: progress.map(format_progress),
            members_display: format_count(room.member_count),
            name: room.name,
            description: room.description,
            image_url: room.image_url,
            token_id: room.token_id.to_string(),
            creator_id: room.creator_id,
            target_amount: room.target_amount,
            total_invested: room.total_invested,
            member_count: room.member_count,
            is_active: room.is_active,
            joined,
            end_date: room.end_date,
            created_at: room.created_at,
            tags: room.tags,
        }
    }
}

/// Response body for `GET /rooms`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomListResponse {
    /// Matching rooms, in display order.
    pub data: Vec<RoomDto>,
    /// Members across every room, not only the matching ones.
    pub total_members: u64,
    /// Formatted member total.
    pub total_members_display: String,
}

/// Response body of a successful room action.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomActionResponse {
    /// The room after the action.
    pub room: RoomDto,
    /// Message to show the user.
    pub notification: Notification,
}
