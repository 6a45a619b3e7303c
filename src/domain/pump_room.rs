//! Pump rooms: social funding campaigns for a single token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RoomId, TokenId};

/// Optional community links of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Telegram group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    /// Discord invite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    /// Twitter / X profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// A funding-goal campaign referencing one token.
///
/// `total_invested` and `member_count` only ever grow; the registry exposes
/// no operation that decreases them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpRoom {
    /// Room identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Pitch text.
    pub description: String,
    /// Cover image URL.
    pub image_url: String,
    /// Token the room is pumping.
    pub token_id: TokenId,
    /// Creator account.
    pub creator_id: String,
    /// Funding goal in USD.
    pub target_amount: f64,
    /// Total pledged so far in USD.
    pub total_invested: f64,
    /// Number of members.
    pub member_count: u64,
    /// Whether the campaign accepts members and investments.
    pub is_active: bool,
    /// Campaign end.
    pub end_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Community links.
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl PumpRoom {
    /// Progress toward the funding goal in percent, or `None` when the room
    /// has no target.
    #[must_use]
    pub fn progress_percentage(&self) -> Option<f64> {
        if self.target_amount > 0.0 {
            Some(self.total_invested / self.target_amount * 100.0)
        } else {
            None
        }
    }
}
