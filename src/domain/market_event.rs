//! Domain events reflecting market and room state mutations.
//!
//! Every state change emits a [`MarketEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{RoomId, TokenId};

/// Post-tick market fields of one token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenQuote {
    /// Token identifier.
    pub token_id: TokenId,
    /// New price.
    pub price: f64,
    /// New 24h change in percent.
    pub price_change_24h: f64,
    /// New 24h volume.
    pub volume_24h: f64,
}

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum MarketEvent {
    /// Emitted after each perturbation tick.
    PricesTicked {
        /// Monotonic tick counter, starting at 1.
        tick: u64,
        /// Quotes of every token, in store order.
        quotes: Vec<TokenQuote>,
        /// Tick timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a user joins a room.
    RoomJoined {
        /// Room identifier.
        room_id: RoomId,
        /// Joining user.
        user_id: String,
        /// Member count after the join.
        member_count: u64,
        /// Join timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a user invests in a room.
    RoomInvested {
        /// Room identifier.
        room_id: RoomId,
        /// Investing user.
        user_id: String,
        /// Amount invested in USD.
        amount: f64,
        /// Room total after the investment.
        total_invested: f64,
        /// Investment timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a room is created.
    RoomCreated {
        /// Room identifier.
        room_id: RoomId,
        /// Token the room is pumping.
        token_id: TokenId,
        /// Room name.
        name: String,
        /// Funding goal.
        target_amount: f64,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },
}

/// What an event is about, for subscription filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTopic<'a> {
    /// Touches every token.
    Market,
    /// Touches a single room.
    Room(&'a RoomId),
}

impl MarketEvent {
    /// Returns the topic used to route this event to subscribers.
    #[must_use]
    pub fn topic(&self) -> EventTopic<'_> {
        match self {
            Self::PricesTicked { .. } => EventTopic::Market,
            Self::RoomJoined { room_id, .. }
            | Self::RoomInvested { room_id, .. }
            | Self::RoomCreated { room_id, .. } => EventTopic::Room(room_id),
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::PricesTicked { .. } => "prices_ticked",
            Self::RoomJoined { .. } => "room_joined",
            Self::RoomInvested { .. } => "room_invested",
            Self::RoomCreated { .. } => "room_created",
        }
    }
}
